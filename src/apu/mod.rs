// APU module - Audio Processing Unit implementation
//
// This module models the APU (Ricoh 2A03) register file at $4000-$4017.
// Audio synthesis is explicitly out of scope: this crate never produces a
// sample stream. Every register still behaves like real hardware from the
// CPU's point of view (write-only ports read back 0, $4015 reports which
// channels are enabled) so that games polling or twiddling these addresses
// don't desync, but no channel timer, envelope, sweep, or mixer runs behind
// them.
//
// ## Register Map
//
// ### Pulse 1 ($4000-$4003) / Pulse 2 ($4004-$4007)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4000/4 | Duty cycle, envelope                  |
// | $4001/5 | Sweep unit                            |
// | $4002/6 | Timer low byte                        |
// | $4003/7 | Length counter, timer high bits       |
//
// ### Triangle ($4008-$400B)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4008   | Linear counter                        |
// | $4009   | Unused                                |
// | $400A   | Timer low byte                        |
// | $400B   | Length counter, timer high bits       |
//
// ### Noise ($400C-$400F)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $400C   | Envelope                              |
// | $400D   | Unused                                |
// | $400E   | Mode, period                          |
// | $400F   | Length counter                        |
//
// ### DMC ($4010-$4013)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4010   | Flags, rate                           |
// | $4011   | Direct load                           |
// | $4012   | Sample address                        |
// | $4013   | Sample length                         |
//
// ### Control ($4015, $4017)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4015   | Status/Control (R/W)                  |
// | $4017   | Frame counter (W)                     |

use crate::bus::MemoryMappedDevice;

/// APU register file.
///
/// Each write-only register group is stored verbatim so that games which
/// read back their own writes through save-state-style tooling (or this
/// crate's own tests) see consistent values; none of the stored bytes drive
/// any synthesis.
pub struct Apu {
    // ========================================
    // Pulse 1 Registers ($4000-$4003)
    // ========================================
    pulse1: [u8; 4],

    // ========================================
    // Pulse 2 Registers ($4004-$4007)
    // ========================================
    pulse2: [u8; 4],

    // ========================================
    // Triangle Registers ($4008-$400B)
    // ========================================
    triangle: [u8; 4],

    // ========================================
    // Noise Registers ($400C-$400F)
    // ========================================
    noise: [u8; 4],

    // ========================================
    // DMC Registers ($4010-$4013)
    // ========================================
    dmc: [u8; 4],

    /// $4015: Status/Control - Enable/disable channels
    ///
    /// Read: channel-enabled bits (bits 0-4), mirroring the last write.
    /// Write: enables/disables channels; bits 5-7 are ignored.
    status_control: u8,

    /// $4017: Frame Counter - Sequencer mode and IRQ inhibit
    ///
    /// Stored so writes/reads round-trip; no frame sequencer or
    /// controller-frame-counter IRQ is ever generated from it.
    frame_counter: u8,
}

impl Apu {
    /// Create a new APU instance with default state.
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::apu::Apu;
    ///
    /// let apu = Apu::new();
    /// ```
    pub fn new() -> Self {
        Apu {
            pulse1: [0; 4],
            pulse2: [0; 4],
            triangle: [0; 4],
            noise: [0; 4],
            dmc: [0; 4],
            status_control: 0x00,
            frame_counter: 0x00,
        }
    }

    /// Reset the APU to power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read from an APU register.
    ///
    /// # Register Behaviors
    ///
    /// - $4015: Returns the channel-enabled bits from the last write.
    /// - All other registers: Write-only, return 0.
    fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            0x4000..=0x4003 => 0,
            0x4004..=0x4007 => 0,
            0x4008..=0x400B => 0,
            0x400C..=0x400F => 0,
            0x4010..=0x4013 => 0,
            0x4015 => self.status_control & 0x1F,
            0x4017 => 0,
            _ => 0,
        }
    }

    /// Write to an APU register.
    ///
    /// All registers accept writes and store the raw bytes; no synthesis
    /// reacts to them.
    fn write_register(&mut self, addr: u16, data: u8) {
        match addr {
            0x4000..=0x4003 => self.pulse1[(addr - 0x4000) as usize] = data,
            0x4004..=0x4007 => self.pulse2[(addr - 0x4004) as usize] = data,
            0x4008..=0x400B => self.triangle[(addr - 0x4008) as usize] = data,
            0x400C..=0x400F => self.noise[(addr - 0x400C) as usize] = data,
            0x4010..=0x4013 => self.dmc[(addr - 0x4010) as usize] = data,

            // Bit 0-4: enable Pulse 1/2, Triangle, Noise, DMC respectively.
            0x4015 => self.status_control = data & 0x1F,

            // Bit 6: IRQ inhibit, bit 7: sequencer mode (4-step/5-step).
            // Stored only; $4017's controller-frame-counter IRQ is never
            // raised by this stub.
            0x4017 => self.frame_counter = data,

            _ => {}
        }
    }
}

impl MemoryMappedDevice for Apu {
    /// Read a byte from APU registers ($4000-$4017).
    fn read(&mut self, addr: u16) -> u8 {
        self.read_register(addr)
    }

    /// Write a byte to APU registers ($4000-$4017).
    fn write(&mut self, addr: u16, data: u8) {
        self.write_register(addr, data);
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}
