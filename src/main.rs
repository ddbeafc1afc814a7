use pineda::{rasterize, ColorQuantizer, Framebuffer, RasterizerInput, VertexBuffer};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

const INIT_WIDTH: u32 = 640;
const INIT_HEIGHT: u32 = 480;
const COLOR_BACKGROUND: u32 = 0xFF1E1E1E;

// 1 KiB of fragment staging, a few dozen records at this vertex layout.
const FRAGMENT_SCRATCH_WORDS: usize = 256;

// Two screen-space triangles, (x, y, z, w, r, g, b, a) per vertex.
#[rustfmt::skip]
const VERTEX_DATA: [f32; 48] = [
    50.0,  200.0, 1.0, 1.0,   1.0, 0.0, 0.0, 1.0,
    100.0, 200.0, 1.0, 1.0,   0.0, 1.0, 0.0, 1.0,
    75.0,  100.0, 1.0, 1.0,   0.0, 0.0, 1.0, 1.0,
    300.0, 300.0, 1.0, 1.0,   1.0, 0.0, 0.0, 1.0,
    300.0, 100.0, 1.0, 1.0,   1.0, 0.0, 0.0, 1.0,
    500.0, 200.0, 1.0, 1.0,   0.0, 1.0, 0.0, 1.0,
];

// Triples wound clockwise on screen so they survive back-face culling.
const INDICES: [u32; 6] = [0, 2, 1, 3, 4, 5];

fn process_input(event_pump: &mut sdl2::EventPump) -> (bool, Option<(u32, u32)>, bool) {
    let mut new_size = None;
    let mut screenshot = false;
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => return (false, None, false),
            Event::KeyDown {
                keycode: Some(Keycode::S),
                ..
            } => {
                screenshot = true;
            }
            Event::Window { win_event: sdl2::event::WindowEvent::Resized(w, h), .. } => {
                if w > 0 && h > 0 {
                    new_size = Some((w as u32, h as u32));
                }
            }
            _ => {}
        }
    }
    (true, new_size, screenshot)
}

fn render(framebuffer: &mut Framebuffer, scratch: &mut [u32]) {
    framebuffer.clear(COLOR_BACKGROUND);

    let vertices = VertexBuffer::new(&VERTEX_DATA, 8);
    let input = RasterizerInput::new(vertices, &INDICES, framebuffer.viewport());

    let width = framebuffer.width();
    let mut sink = ColorQuantizer::new(framebuffer.words_mut(), width);
    rasterize(&input, scratch, &mut sink);
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Pineda", INIT_WIDTH, INIT_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let mut window_width = INIT_WIDTH;
    let mut window_height = INIT_HEIGHT;

    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, window_width, window_height)
        .map_err(|e| e.to_string())?;

    let mut framebuffer = Framebuffer::new(window_width, window_height);
    let mut scratch = vec![0u32; FRAGMENT_SCRATCH_WORDS];
    let mut event_pump = sdl_context.event_pump()?;

    let mut is_running = true;
    while is_running {
        let (running, new_size, screenshot) = process_input(&mut event_pump);
        is_running = running;

        // Handle resize
        if let Some((w, h)) = new_size {
            window_width = w;
            window_height = h;
            framebuffer = Framebuffer::new(window_width, window_height);
            texture = texture_creator
                .create_texture_streaming(PixelFormatEnum::ARGB8888, window_width, window_height)
                .map_err(|e| e.to_string())?;
        }

        render(&mut framebuffer, &mut scratch);

        if screenshot {
            framebuffer.save("frame.png").map_err(|e| e.to_string())?;
        }

        // Update texture with the rendered frame
        texture
            .update(None, framebuffer.as_bytes(), (window_width * 4) as usize)
            .map_err(|e| e.to_string())?;

        canvas.set_draw_color(sdl2::pixels::Color::RGB(64, 64, 64));
        canvas.clear();
        canvas.copy(&texture, None, Some(Rect::new(0, 0, window_width, window_height)))?;
        canvas.present();
    }

    Ok(())
}
