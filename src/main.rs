// NES Emulator - Minimal Entry Point
//
// Loads an iNES ROM and runs the core for a fixed number of frames, printing
// basic progress. There is no window, input device, or audio output here —
// those are host application concerns layered on top of this crate.

use nes_rs::emulator::Emulator;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let rom_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: nes-rs <rom.nes>");
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = Emulator::new();
    if let Err(err) = emulator.load_rom(&rom_path) {
        eprintln!("failed to load '{}': {}", rom_path, err);
        return ExitCode::FAILURE;
    }

    println!("loaded '{}'", rom_path);

    const FRAMES: u32 = 60;
    for frame in 0..FRAMES {
        emulator.run_frame();
        if emulator.is_halted() {
            println!("halted after {} frame(s)", frame + 1);
            return ExitCode::SUCCESS;
        }
    }

    println!("ran {} frames without halting", FRAMES);
    ExitCode::SUCCESS
}
