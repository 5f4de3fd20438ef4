//! Where finished frames go

/// Host drawing surface receiving one raw RGBA8 frame per tick
pub trait Surface {
    fn present(&mut self, width: u32, height: u32, pixels: &[u8]);
}

/// Keeps every presented frame, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<(u32, u32, Vec<u8>)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.frames.len()
    }

    pub fn last(&self) -> Option<&(u32, u32, Vec<u8>)> {
        self.frames.last()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, width: u32, height: u32, pixels: &[u8]) {
        self.frames.push((width, height, pixels.to_vec()));
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::Surface;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// Defined by the host page; paints the bytes onto the canvas
        #[wasm_bindgen(js_name = DrawClamped)]
        fn draw_clamped(width: u32, height: u32, pixels: &[u8]);
    }

    /// Hands frames to the page's global `DrawClamped` function
    #[derive(Debug, Default, Clone, Copy)]
    pub struct DrawClamped;

    impl Surface for DrawClamped {
        fn present(&mut self, width: u32, height: u32, pixels: &[u8]) {
            draw_clamped(width, height, pixels);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::DrawClamped;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_keeps_frames_in_order() {
        let mut surface = RecordingSurface::new();
        surface.present(1, 1, &[1, 2, 3, 4]);
        surface.present(2, 1, &[0; 8]);

        assert_eq!(surface.count(), 2);
        assert_eq!(surface.frames[0], (1, 1, vec![1, 2, 3, 4]));
        assert_eq!(surface.last().map(|f| f.0), Some(2));
    }
}
