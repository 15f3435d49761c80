use pixel_ed::{argb, built_ins, source, Frame, Grid, View};

fn main() {
    env_logger::init();

    // Command-line stand-ins for the toolbar: an image path and a command name
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "img/ireland.png".to_owned());
    let command_name = args.next().unwrap_or_else(|| "Negative".to_owned());

    // Build the grid once from the decoded image
    let image = source::load_argb(&path).unwrap();
    let grid = Grid::from_source(&image).unwrap();
    let mut view = View::new(grid);

    // Select a command from the palette, as a toolbar click would
    let palette = built_ins::standard_palette();
    let command = palette
        .by_name(&command_name)
        .unwrap_or_else(|| panic!("no command named {:?}", command_name));
    view.set_command(command.clone());

    view.paint(&mut save_frame);
    log::info!("applied {:?} to {}", command_name, path);
}

/// Demo display collaborator: materialise the raster as a PNG
fn save_frame(frame: Frame<'_, u32>) {
    let mut out = image::RgbaImage::new(frame.size.x, frame.size.y);
    for (pixel, &word) in out.pixels_mut().zip(frame.pixels) {
        *pixel = argb::unpack(word);
    }
    out.save("out.png").unwrap();
}
