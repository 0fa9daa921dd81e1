//! Open-addressing member table
//!
//! Provides:
//! - Order-insensitive character-sum hashing
//! - Bounded quadratic probing from the home bucket
//! - Lazy deletion with tombstones
//! - Doubling growth once the load factor passes 0.5

use crate::audit::{AuditSink, NullAuditSink};
use crate::config::{TableConfig, DEFAULT_CAPACITY, GROWTH_FACTOR, MAX_LOAD_FACTOR};
use crate::error::{Result, TableError};
use crate::record::Record;
use crate::slot::Slot;

/// Home bucket and the buckets probed after it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeTrace {
    pub home: usize,
    pub visited: Vec<usize>,
}

/// Where a key lands in a slot array
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resolution {
    /// Live slot holding the key
    Match(usize),

    /// Insertion target: first tombstone passed, else the empty slot that
    /// ended the search
    Vacant(usize),

    /// Probe bound reached with neither
    Exhausted,
}

/// Snapshot of table occupancy
#[derive(Clone, Debug, PartialEq)]
pub struct TableStats {
    pub size: usize,
    pub capacity: usize,
    pub load_factor: f64,
    pub tombstones: usize,
}

/// Member table keyed by name
pub struct ProbeTable {
    /// Buckets; the length is the capacity
    pub(crate) slots: Vec<Slot>,

    /// Live (occupied, non-tombstoned) entries
    pub(crate) size: usize,

    /// Probe bound as a multiple of capacity
    pub(crate) probe_factor: usize,

    /// Receives audit text; failures are logged and dropped
    pub(crate) sink: Box<dyn AuditSink>,
}

impl ProbeTable {
    /// Create a table with no audit output
    ///
    /// # Arguments
    /// * `capacity` - Initial number of buckets (must be positive)
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_sink(capacity, NullAuditSink)
    }

    /// Create a table reporting to `sink`
    pub fn with_sink<S: AuditSink + 'static>(capacity: usize, sink: S) -> Result<Self> {
        Self::from_config(&TableConfig::new(capacity), sink)
    }

    pub fn from_config<S: AuditSink + 'static>(config: &TableConfig, sink: S) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "creating table with capacity {} and probe factor {}",
            config.capacity,
            config.probe_factor
        );

        Ok(ProbeTable {
            slots: vec![Slot::Empty; config.capacity],
            size: 0,
            probe_factor: config.probe_factor,
            sink: Box::new(sink),
        })
    }

    /// Home bucket of `key`
    pub fn hash(&self, key: &str) -> Result<usize> {
        ensure_key(key)?;
        Ok(hash_in(key, self.capacity()))
    }

    /// Buckets a lookup of `key` would visit right now
    pub fn probe_trace(&self, key: &str) -> Result<ProbeTrace> {
        ensure_key(key)?;
        Ok(resolve_in(&self.slots, self.probe_factor, key).0)
    }

    /// Look up a member by name
    pub fn get(&self, name: &str) -> Result<Option<&Record>> {
        ensure_key(name)?;
        let (trace, resolution) = resolve_in(&self.slots, self.probe_factor, name);

        self.audit(format!(
            "(>) An attempt to retrieve [{}] was made with a hash value of [{}] with visited buckets of {:?}",
            name, trace.home, trace.visited
        ));

        Ok(match resolution {
            Resolution::Match(position) => self.slots[position].record(),
            _ => None,
        })
    }

    pub fn contains_name(&self, name: &str) -> Result<bool> {
        Ok(self.get(name)?.is_some())
    }

    /// Insert or overwrite a member
    ///
    /// Returns the previous record stored under the same name. May grow the
    /// table before returning: when the load factor passes the bound, or
    /// when the probe walk finds no usable bucket. Fails only if capacity
    /// can no longer grow.
    pub fn put(&mut self, record: Record) -> Result<Option<Record>> {
        let name = record.name().to_string();
        let mut grew = false;

        let previous = loop {
            let (trace, resolution) = resolve_in(&self.slots, self.probe_factor, &name);
            match resolution {
                Resolution::Match(position) => {
                    break std::mem::replace(&mut self.slots[position], Slot::Occupied(record))
                        .into_record();
                }
                Resolution::Vacant(position) => {
                    self.slots[position] = Slot::Occupied(record);
                    self.size += 1;
                    break None;
                }
                Resolution::Exhausted => {
                    if self.capacity().checked_mul(GROWTH_FACTOR).is_none() {
                        return Err(TableError::ProbeExhausted {
                            key: name,
                            capacity: self.capacity(),
                            attempts: self.max_probes(),
                        });
                    }
                    log::warn!(
                        "no free bucket for [{}] within {} probes (visited {:?}), growing",
                        name,
                        self.max_probes(),
                        trace.visited
                    );
                    self.grow();
                    grew = true;
                }
            }
        };

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.grow();
            grew = true;
        }

        // the audit line describes where the member sits now
        let trace = resolve_in(&self.slots, self.probe_factor, &name).0;
        log::debug!(
            "put [{}] home={} visited={:?} replaced={} grew={}",
            name,
            trace.home,
            trace.visited,
            previous.is_some(),
            grew
        );

        self.audit(format!(
            "(+) Member [{}] was added to the database with a hash value of [{}] and visited these buckets {:?}\n    Load factor is at [%{}] with a table size of [{}]",
            name,
            trace.home,
            trace.visited,
            self.load_factor_percent(),
            self.size
        ));

        Ok(previous)
    }

    /// Remove a member, leaving a tombstone in its bucket
    pub fn remove(&mut self, name: &str) -> Result<Option<Record>> {
        ensure_key(name)?;
        let (trace, resolution) = resolve_in(&self.slots, self.probe_factor, name);

        let Resolution::Match(position) = resolution else {
            log::debug!("remove [{}]: not present", name);
            return Ok(None);
        };

        self.audit(format!(
            "(-) An attempt to remove [{}] was made with a hash value of [{}] with visited buckets of {:?}",
            name, trace.home, trace.visited
        ));

        let removed = self.slots[position].take_live();
        if removed.is_some() {
            self.size -= 1;
        }
        Ok(removed)
    }

    /// Drop every entry, keeping the current capacity
    ///
    /// No-op on a table that is already empty.
    pub fn clear(&mut self) {
        if self.is_empty() {
            log::debug!("clear on empty table ignored");
            return;
        }

        let discarded = self.size;
        self.slots = vec![Slot::Empty; self.capacity()];
        self.size = 0;

        self.audit(format!(
            "(x) Database cleared, [{}] members discarded",
            discarded
        ));
    }

    /// Reinsert live entries into a table `GROWTH_FACTOR` times larger
    ///
    /// Tombstones are dropped. If a survivor cannot be placed within the
    /// probe bound, capacity grows again and placement restarts.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let mut survivors: Vec<Record> = std::mem::take(&mut self.slots)
            .into_iter()
            .filter_map(Slot::into_record)
            .collect();
        let relocated = survivors.len();

        let mut capacity = old_capacity;
        loop {
            capacity = capacity.saturating_mul(GROWTH_FACTOR);
            match rehash_into(survivors, capacity, self.probe_factor) {
                Ok(slots) => {
                    self.slots = slots;
                    break;
                }
                Err(returned) => {
                    log::warn!(
                        "growth to {} buckets could not place every member, growing again",
                        capacity
                    );
                    survivors = returned;
                }
            }
        }
        self.size = relocated;

        log::debug!(
            "grew table from {} to {} buckets ({} members)",
            old_capacity,
            capacity,
            relocated
        );
        self.audit(format!(
            "\n >>> TABLE REHASH <<< \n    capacity [{}] -> [{}], relocated [{}] members",
            old_capacity, capacity, relocated
        ));
    }

    fn audit(&self, message: String) {
        if let Err(err) = self.sink.append(&message) {
            log::warn!("audit sink failed: {}", err);
        }
    }

    fn max_probes(&self) -> usize {
        self.capacity().saturating_mul(self.probe_factor)
    }

    /// Get current size
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get load factor
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    pub fn load_factor_percent(&self) -> f64 {
        self.size as f64 * 100.0 / self.capacity() as f64
    }

    /// Iterate over live records in bucket order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.slots.iter().filter_map(Slot::record)
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            size: self.size,
            capacity: self.capacity(),
            load_factor: self.load_factor(),
            tombstones: self.slots.iter().filter(|slot| slot.is_tombstone()).count(),
        }
    }
}

impl Default for ProbeTable {
    fn default() -> Self {
        ProbeTable {
            slots: vec![Slot::Empty; DEFAULT_CAPACITY],
            size: 0,
            probe_factor: TableConfig::default().probe_factor,
            sink: Box::new(NullAuditSink),
        }
    }
}

fn ensure_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(TableError::EmptyKey);
    }
    Ok(())
}

/// Sum of character codes, skipping commas and spaces, modulo `capacity`
fn hash_in(key: &str, capacity: usize) -> usize {
    let sum = key
        .chars()
        .filter(|c| *c != ',' && *c != ' ')
        .fold(0u64, |acc, c| acc.wrapping_add(c as u64));
    (sum % capacity as u64) as usize
}

/// Quadratic probe sequence: `home`, then `pos = (pos + i*i) % capacity`
#[inline(always)]
fn probe_sequence(home: usize, capacity: usize, max_probes: usize) -> impl Iterator<Item = usize> {
    std::iter::once(home).chain((1..max_probes).scan(home, move |position, i| {
        let step = i % capacity;
        *position = (*position + step * step % capacity) % capacity;
        Some(*position)
    }))
}

fn resolve_in(slots: &[Slot], probe_factor: usize, key: &str) -> (ProbeTrace, Resolution) {
    let capacity = slots.len();
    let home = hash_in(key, capacity);
    let mut visited = Vec::new();
    let mut first_tombstone = None;

    for (step, position) in probe_sequence(home, capacity, capacity.saturating_mul(probe_factor)).enumerate() {
        if step > 0 {
            visited.push(position);
        }
        log::trace!("probe [{}] step {} -> bucket {}", key, step, position);

        match &slots[position] {
            Slot::Empty => {
                let target = first_tombstone.unwrap_or(position);
                return (ProbeTrace { home, visited }, Resolution::Vacant(target));
            }
            Slot::Occupied(record) if record.same_entity(key) => {
                return (ProbeTrace { home, visited }, Resolution::Match(position));
            }
            Slot::Occupied(_) => {}
            Slot::Tombstone => {
                first_tombstone.get_or_insert(position);
            }
        }
    }

    let resolution = first_tombstone.map_or(Resolution::Exhausted, Resolution::Vacant);
    (ProbeTrace { home, visited }, resolution)
}

/// Place `survivors` into a fresh array of `capacity` buckets
///
/// Hands the records back if any of them cannot be placed.
fn rehash_into(
    survivors: Vec<Record>,
    capacity: usize,
    probe_factor: usize,
) -> std::result::Result<Vec<Slot>, Vec<Record>> {
    let mut slots = vec![Slot::Empty; capacity];
    let mut pending = survivors.into_iter();

    while let Some(record) = pending.next() {
        match resolve_in(&slots, probe_factor, record.name()).1 {
            Resolution::Vacant(position) | Resolution::Match(position) => {
                slots[position] = Slot::Occupied(record);
            }
            Resolution::Exhausted => {
                let mut returned: Vec<Record> =
                    slots.into_iter().filter_map(Slot::into_record).collect();
                returned.push(record);
                returned.extend(pending);
                return Err(returned);
            }
        }
    }

    Ok(slots)
}
