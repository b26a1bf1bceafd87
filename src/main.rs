use clap::Parser;
use macroquad::logging::error;
use macroquad::prelude::*;
use life_grid::{
    Simulation,
    cli::SimulationArgs,
    input::{self, PointerState},
    rendering, ui,
};

#[derive(Parser, Debug)]
#[command(name = "life_grid", about = "Conway's Game of Life")]
struct Args {
    #[command(flatten)]
    sim: SimulationArgs,
}

fn window_conf() -> Conf {
    let (width, height) = ui::window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    let mut sim = match Simulation::new(&args.sim.to_config()) {
        Ok(sim) => sim,
        Err(err) => {
            error!("cannot start simulation: {}", err);
            return;
        }
    };

    let cell_size = ui::cell_size(sim.engine().dimensions());
    let mut pointer = PointerState::default();

    loop {
        let commands = input::poll_commands(&mut pointer, cell_size);
        if let Err(err) = sim.apply_all(commands) {
            error!("{}", err);
        }

        sim.tick(get_frame_time());

        clear_background(Color::from_rgba(220, 220, 220, 255));
        rendering::draw_grid(sim.engine());
        rendering::draw_panel(sim.engine());

        next_frame().await;
    }
}
