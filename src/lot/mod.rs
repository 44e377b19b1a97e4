//! Parking lot state
//!
//! A lot is a fixed-length, ordered run of slots indexed `1..=capacity`.
//! Allocation is first-fit and every lookup is a linear scan in index order.

use serde::Serialize;

use crate::error::{ParkingError, Result};

/// A parked car. Plate and colour are only ever set together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    pub plate: String,
    pub color: String,
}

/// One position in the lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    index: usize,
    car: Option<Car>,
}

impl Slot {
    fn empty(index: usize) -> Self {
        Self { index, car: None }
    }

    /// 1-based position, fixed at creation
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn car(&self) -> Option<&Car> {
        self.car.as_ref()
    }

    pub fn is_free(&self) -> bool {
        self.car.is_none()
    }
}

/// Outcome of parking a car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parking {
    /// The car took this slot
    Allocated(usize),
    /// Every slot is occupied
    Full,
    /// Plate or colour was empty; nothing was allocated
    MissingDetails,
}

/// Outcome of freeing a slot by number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The slot was cleared (or was already free)
    Freed(usize),
    /// The number is beyond the lot's capacity
    DoesNotExist(i64),
    /// The number is not a valid index (zero or negative)
    NotFound,
}

/// The parking lot itself
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParkingLot {
    slots: Vec<Slot>,
}

impl ParkingLot {
    /// Create an empty lot with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (1..=capacity).map(Slot::empty).collect(),
        }
    }

    /// Create a lot from a raw capacity argument.
    ///
    /// A capacity that parses but cannot be allocated is rejected like a
    /// malformed one.
    pub fn create(raw: &str) -> Result<Self> {
        let invalid = || ParkingError::invalid_argument("amount of parking slots", raw);
        let capacity = raw.parse::<usize>().map_err(|_| invalid())?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|_| invalid())?;
        slots.extend((1..=capacity).map(Slot::empty));
        Ok(Self { slots })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Occupied slots in index order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Car)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.car.as_ref().map(|car| (slot.index, car)))
    }

    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_free()).count()
    }

    /// Park a car in the lowest-indexed free slot.
    ///
    /// A car needs both a plate and a colour. Plates are not checked for
    /// uniqueness.
    pub fn park(&mut self, plate: &str, color: &str) -> Parking {
        if plate.is_empty() || color.is_empty() {
            return Parking::MissingDetails;
        }
        let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_free()) else {
            return Parking::Full;
        };
        slot.car = Some(Car {
            plate: plate.to_string(),
            color: color.to_string(),
        });
        Parking::Allocated(slot.index)
    }

    /// Free the slot with the given raw number
    pub fn remove_car(&mut self, slot_number: &str) -> Result<Removal> {
        let number = parse_slot_number(slot_number)?;
        Ok(self.remove(number))
    }

    /// Free a slot by number. Clearing an already free slot still succeeds.
    pub fn remove(&mut self, number: i64) -> Removal {
        if number > self.capacity() as i64 {
            return Removal::DoesNotExist(number);
        }
        match self.slots.iter_mut().find(|slot| slot.index as i64 == number) {
            Some(slot) => {
                slot.car = None;
                Removal::Freed(slot.index)
            }
            None => Removal::NotFound,
        }
    }

    /// Plates of all cars with the given colour, in slot order
    pub fn plates_by_color(&self, color: &str) -> Vec<String> {
        self.occupied()
            .filter(|(_, car)| car.color == color)
            .map(|(_, car)| car.plate.clone())
            .collect()
    }

    /// Slot numbers of all cars with the given colour, ascending
    pub fn slots_by_color(&self, color: &str) -> Vec<usize> {
        self.occupied()
            .filter(|(_, car)| car.color == color)
            .map(|(index, _)| index)
            .collect()
    }

    /// Slot number of the first car with the given plate
    pub fn slot_by_plate(&self, plate: &str) -> Option<usize> {
        self.occupied()
            .find(|(_, car)| car.plate == plate)
            .map(|(index, _)| index)
    }
}

/// Parse a slot number argument. Negative numbers parse; they just never match a slot.
pub fn parse_slot_number(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| ParkingError::invalid_argument("parking slot number", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot_with(colors: &[(&str, &str)]) -> ParkingLot {
        let mut lot = ParkingLot::new(colors.len());
        for (plate, color) in colors {
            assert!(matches!(lot.park(plate, color), Parking::Allocated(_)));
        }
        lot
    }

    #[test]
    fn test_create_slots_are_free_and_contiguous() {
        let lot = ParkingLot::create("5").unwrap();
        assert_eq!(lot.capacity(), 5);
        assert_eq!(lot.free_count(), 5);
        let indices: Vec<usize> = lot.slots().iter().map(Slot::index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_create_rejects_non_numeric() {
        let err = ParkingLot::create("abc").unwrap_err();
        assert!(matches!(err, ParkingError::InvalidArgument { .. }));
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_create_rejects_negative_and_empty() {
        assert!(ParkingLot::create("-1").is_err());
        assert!(ParkingLot::create("").is_err());
    }

    #[test]
    fn test_zero_capacity_is_always_full() {
        let mut lot = ParkingLot::create("0").unwrap();
        assert_eq!(lot.park("KA-01", "White"), Parking::Full);
    }

    #[test]
    fn test_create_rejects_unallocatable_capacity() {
        let err = ParkingLot::create("18446744073709551615").unwrap_err();
        assert!(matches!(err, ParkingError::InvalidArgument { .. }));
    }

    #[test]
    fn test_park_without_plate_or_colour_allocates_nothing() {
        let mut lot = ParkingLot::new(2);
        assert_eq!(lot.park("", ""), Parking::MissingDetails);
        assert_eq!(lot.park("A", ""), Parking::MissingDetails);
        assert_eq!(lot.park("", "red"), Parking::MissingDetails);
        assert_eq!(lot.free_count(), 2);
        assert_eq!(lot.occupied().count(), 0);
        assert!(lot.slots_by_color("").is_empty());
        assert_eq!(lot.park("A", "red"), Parking::Allocated(1));
    }

    #[test]
    fn test_park_first_fit_until_full() {
        let mut lot = ParkingLot::new(3);
        assert_eq!(lot.park("A", "red"), Parking::Allocated(1));
        assert_eq!(lot.park("B", "red"), Parking::Allocated(2));
        assert_eq!(lot.park("C", "red"), Parking::Allocated(3));
        assert_eq!(lot.park("D", "red"), Parking::Full);
        assert_eq!(lot.free_count(), 0);
        assert_eq!(lot.slot_by_plate("D"), None);
    }

    #[test]
    fn test_remove_then_reuse_lowest_slot() {
        let mut lot = lot_with(&[("A", "red"), ("B", "blue"), ("C", "red")]);
        assert_eq!(lot.remove_car("2").unwrap(), Removal::Freed(2));
        assert!(lot.slots()[1].is_free());
        assert_eq!(lot.park("D", "green"), Parking::Allocated(2));
    }

    #[test]
    fn test_remove_free_slot_is_idempotent() {
        let mut lot = ParkingLot::new(2);
        assert_eq!(lot.remove(1), Removal::Freed(1));
        assert_eq!(lot.remove(1), Removal::Freed(1));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut lot = ParkingLot::new(2);
        assert_eq!(lot.remove(3), Removal::DoesNotExist(3));
        assert_eq!(lot.remove(0), Removal::NotFound);
        assert_eq!(lot.remove(-4), Removal::NotFound);
    }

    #[test]
    fn test_remove_rejects_non_numeric() {
        let mut lot = lot_with(&[("A", "red")]);
        assert!(lot.remove_car("one").is_err());
        assert_eq!(lot.slot_by_plate("A"), Some(1));
    }

    #[test]
    fn test_search_by_color() {
        let lot = lot_with(&[("A", "red"), ("B", "blue"), ("C", "red")]);
        assert_eq!(lot.slots_by_color("red"), vec![1, 3]);
        assert_eq!(lot.plates_by_color("red"), vec!["A", "C"]);
        assert!(lot.slots_by_color("Red").is_empty());
        assert!(lot.plates_by_color("green").is_empty());
    }

    #[test]
    fn test_search_by_plate_returns_first_match() {
        let mut lot = ParkingLot::new(3);
        lot.park("X", "red");
        lot.park("Y", "blue");
        lot.park("Y", "green");
        assert_eq!(lot.slot_by_plate("Y"), Some(2));
        assert_eq!(lot.slot_by_plate("Z"), None);
    }

    #[test]
    fn test_occupied_skips_free_slots() {
        let mut lot = lot_with(&[("A", "red"), ("B", "blue"), ("C", "red")]);
        lot.remove(2);
        let listed: Vec<usize> = lot.occupied().map(|(index, _)| index).collect();
        assert_eq!(listed, vec![1, 3]);
    }
}
