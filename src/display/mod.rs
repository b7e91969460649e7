// Display module - core-side video output primitives
//
// This module provides:
// - NES color palette (52 unique colors), loadable from a host-provided file
// - Frame buffer (256×240 pixels)
//
// Window creation, GPU presentation, and VSync/frame pacing are host
// application concerns, not the core's; they are not implemented here.

pub mod framebuffer;
pub mod palette;

pub use framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use palette::{palette_to_rgb, palette_to_rgba, NES_PALETTE};
