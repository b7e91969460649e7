// Emulator module - top-level façade tying CPU, Bus (PPU/APU/cartridge), and
// configuration together into a single steppable system.
//
// The façade owns the whole machine: it holds the `Cpu` and the `Bus`, and the
// `Bus` in turn owns the `Ppu`, the `Apu`, and the cartridge's mapper. Driving
// the emulator means calling `Emulator::step`, which samples the PPU's NMI
// line, passes it into `Cpu::step` to be serviced (if asserted) before the
// next opcode fetch, then advances the PPU by three dots per elapsed CPU
// cycle via `Ppu::clock` — the same 1:3 ratio real NTSC hardware runs at,
// including any cycles spent servicing the interrupt.

mod config;

pub use config::{EmulatorConfig, SpeedMode};

use crate::bus::Bus;
use crate::cartridge::mappers::{create_mapper, MapperError};
use crate::cartridge::{Cartridge, CartridgeError};
use crate::cpu::Cpu;
use std::path::{Path, PathBuf};

/// Errors surfaced by the emulator façade.
#[derive(Debug)]
pub enum EmulatorError {
    /// Failed to load or parse a ROM file.
    Cartridge(CartridgeError),
    /// The ROM's declared mapper is unsupported, or its configuration was invalid.
    Mapper(MapperError),
}

impl std::fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmulatorError::Cartridge(e) => write!(f, "failed to load cartridge: {}", e),
            EmulatorError::Mapper(e) => write!(f, "failed to attach mapper: {}", e),
        }
    }
}

impl std::error::Error for EmulatorError {}

impl From<CartridgeError> for EmulatorError {
    fn from(e: CartridgeError) -> Self {
        EmulatorError::Cartridge(e)
    }
}

impl From<MapperError> for EmulatorError {
    fn from(e: MapperError) -> Self {
        EmulatorError::Mapper(e)
    }
}

/// The top-level emulator façade.
///
/// Owns the CPU and the bus (which in turn owns the PPU, APU, and the
/// currently-attached cartridge's mapper). Call [`Emulator::load_rom`] to
/// attach a cartridge, then drive execution with [`Emulator::step`] or
/// [`Emulator::run_frame`].
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    cartridge: Option<Cartridge>,
    config: EmulatorConfig,
    rom_path: Option<PathBuf>,
    paused: bool,
    speed_mode: SpeedMode,
}

impl Emulator {
    /// Create a new emulator with no cartridge attached.
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            cartridge: None,
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
            speed_mode: SpeedMode::Normal,
        }
    }

    /// Load an iNES/NES 2.0 ROM file, attach its mapper to the bus, and reset
    /// the machine to begin execution at the cartridge's reset vector.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EmulatorError> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        let mapper = create_mapper(cartridge.clone())?;
        self.bus.attach_cartridge(mapper);
        self.cartridge = Some(cartridge);
        self.rom_path = Some(path.to_path_buf());
        self.reset();
        Ok(())
    }

    /// Reset the CPU and bus-owned devices to their power-on/reset state.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Execute a single CPU instruction and advance the PPU/APU in lockstep.
    ///
    /// Returns `true` if this step completed a video frame. A halted CPU (a
    /// JAM opcode was decoded) is never advanced again; the PPU still runs so
    /// any VBlank/NMI bookkeeping already in flight settles correctly, but no
    /// further instructions execute until [`Emulator::reset`] is called.
    pub fn step(&mut self) -> bool {
        if self.paused {
            return false;
        }

        let pending = crate::cpu::PendingInterrupts {
            nmi: self.bus.ppu_mut().nmi_pending(),
            irq: false,
        };
        if pending.nmi {
            self.bus.ppu_mut().clear_nmi();
        }

        let cpu_cycles = if self.cpu.halted {
            0
        } else {
            self.cpu.step(&mut self.bus, pending)
        };

        self.bus.ppu_mut().clock(cpu_cycles)
    }

    /// Run until a full frame has been produced (or the CPU is halted and no
    /// further progress is possible).
    pub fn run_frame(&mut self) {
        if self.cpu.halted || self.paused {
            return;
        }
        loop {
            if self.step() || self.cpu.halted {
                break;
            }
        }
    }

    /// Whether the CPU has executed a JAM opcode and will not advance further.
    pub fn is_halted(&self) -> bool {
        self.cpu.halted
    }

    /// Set the emulation speed mode (affects only how a driving loop paces
    /// calls to [`Emulator::run_frame`]; the façade itself has no notion of
    /// wall-clock time).
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.speed_mode = mode;
        self.paused = mode == SpeedMode::Paused;
    }

    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
