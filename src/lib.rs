// NES Emulator Library
// Core library for the NES emulator implementation

// Public modules
pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod display;
pub mod emulator;
pub mod input;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use apu::Apu;
pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, CartridgeError, Mapper, Mirroring};
pub use cpu::{Cpu, PendingInterrupts};
pub use debug::{
    disassemble_count, disassemble_instruction, disassemble_range, CpuDebugger, CpuState,
    Debugger, DisassembledInstruction, LogLevel, Logger, MemoryRegion, MemoryViewer, PpuDebugger,
    PpuState, SpriteInfo, TraceEntry,
};
pub use display::FrameBuffer;
pub use emulator::{Emulator, EmulatorConfig, EmulatorError, SpeedMode};
pub use input::{Controller, ControllerIO};
pub use ppu::Ppu;
pub use ram::Ram;
