//! The state one interpreter session works on

use crate::lot::ParkingLot;

/// Owned session state. `None` until the first successful `create_parking_lot`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    lot: Option<ParkingLot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.lot.is_some()
    }

    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    pub fn lot_mut(&mut self) -> Option<&mut ParkingLot> {
        self.lot.as_mut()
    }

    /// Install a new lot, discarding the previous one entirely
    pub fn replace_lot(&mut self, lot: ParkingLot) {
        self.lot = Some(lot);
    }
}
