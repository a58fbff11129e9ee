//! SDL2 host window for viewing charts

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use super::{PixelBuffer, Surface};

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

/// Streaming texture matching the size of the last uploaded buffer
pub struct RenderTarget<'a> {
    creator: &'a TextureCreator<WindowContext>,
    texture: Option<Texture<'a>>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    Resized { width: u32, height: u32 },
}

impl Display {
    /// Open a resizable window with the given client size
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                canvas,
                event_pump,
            },
            texture_creator,
        ))
    }

    /// Current client area size
    pub fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    /// Show `buffer` at the top-left of a white window
    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        buffer: &PixelBuffer,
    ) -> Result<(), String> {
        let texture = target.upload(buffer)?;

        self.canvas.set_draw_color(Color::RGB(255, 255, 255));
        self.canvas.clear();
        if let Some(texture) = texture {
            let dst = Rect::new(0, 0, buffer.width(), buffer.height());
            self.canvas.copy(texture, None, dst)?;
        }
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                Event::Window {
                    win_event: WindowEvent::SizeChanged(w, h),
                    ..
                } => events.push(InputEvent::Resized {
                    width: w.max(0) as u32,
                    height: h.max(0) as u32,
                }),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    pub fn new(creator: &'a TextureCreator<WindowContext>) -> Self {
        Self {
            creator,
            texture: None,
            width: 0,
            height: 0,
        }
    }

    /// Copy `buffer` into the texture, recreating it when the size changed.
    /// Returns None for an empty buffer.
    fn upload(&mut self, buffer: &PixelBuffer) -> Result<Option<&Texture<'a>>, String> {
        if buffer.width() == 0 || buffer.height() == 0 {
            return Ok(None);
        }
        if self.texture.is_none() || (self.width, self.height) != (buffer.width(), buffer.height()) {
            let texture = self
                .creator
                .create_texture_streaming(PixelFormatEnum::RGB24, buffer.width(), buffer.height())
                .map_err(|e| e.to_string())?;
            self.texture = Some(texture);
            self.width = buffer.width();
            self.height = buffer.height();
        }

        match self.texture.as_mut() {
            Some(texture) => {
                texture
                    .update(None, buffer.as_bytes(), buffer.pitch())
                    .map_err(|e| e.to_string())?;
                Ok(Some(&*texture))
            },
            None => Ok(None),
        }
    }
}
