//! Bucket state

use crate::record::Record;

/// One bucket of the table
#[derive(Clone, Debug, Default)]
pub enum Slot {
    /// Never written since the array was allocated
    #[default]
    Empty,

    /// Holds a live record
    Occupied(Record),

    /// Previous occupant was removed; probing continues past it
    Tombstone,
}

impl Slot {
    #[inline]
    pub fn is_live(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    #[inline]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// Live record, if any
    #[inline]
    pub fn record(&self) -> Option<&Record> {
        match self {
            Slot::Occupied(record) => Some(record),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<Record> {
        match self {
            Slot::Occupied(record) => Some(record),
            _ => None,
        }
    }

    /// Turn a live slot into a tombstone and hand back its record
    ///
    /// Empty slots and tombstones are left untouched.
    pub fn take_live(&mut self) -> Option<Record> {
        match std::mem::replace(self, Slot::Tombstone) {
            Slot::Occupied(record) => Some(record),
            other => {
                *self = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_live_leaves_tombstone() {
        let mut slot = Slot::Occupied(Record::new("Bob", "UniB").unwrap());
        let record = slot.take_live().unwrap();
        assert_eq!(record.name(), "Bob");
        assert!(slot.is_tombstone());
        assert!(slot.take_live().is_none());
        assert!(slot.is_tombstone());
    }

    #[test]
    fn test_take_live_on_empty() {
        let mut slot = Slot::default();
        assert!(slot.take_live().is_none());
        assert!(matches!(slot, Slot::Empty));
        assert!(!slot.is_live());
        assert!(slot.record().is_none());
    }
}
