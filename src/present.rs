// Double buffering: compose the whole frame off-screen, then copy it to the
// window in one go so a half-drawn frame is never visible.

use crate::clock::Clock;
use crate::error::Error;
use crate::scene::{render_frame, FrameGeometry, Style};
use crate::types::{FrameBuffer, Point, Size};

/// Something we can show a finished frame on.
pub trait Surface {
    /// Current drawable size; asked fresh for every frame.
    fn client_size(&self) -> Size;

    /// Replace what is on screen with `frame`, pixel for pixel.
    fn blit(&mut self, frame: &FrameBuffer) -> Result<(), Error>;

    /// Keep the surface alive when there is nothing to draw.
    fn pump(&mut self);
}

/// Render one frame sized to the client area and blit it.
/// Returns what was drawn, or None when the client area is empty.
pub fn present_frame<S, C>(
    surface: &mut S,
    anchor: Point,
    clock: &C,
    style: &Style,
) -> Result<Option<FrameGeometry>, Error>
where
    S: Surface + ?Sized,
    C: Clock + ?Sized,
{
    let size = surface.client_size();
    if size.is_empty() {
        surface.pump();
        return Ok(None);
    }

    // Lives only for this call; dropped on every path out, `?` included.
    let mut frame = FrameBuffer::new(size);
    let geometry = render_frame(&mut frame, anchor, clock.elapsed_ms(), style);
    surface.blit(&frame)?;
    Ok(Some(geometry))
}
