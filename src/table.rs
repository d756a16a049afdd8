use crate::value::{Heap, ObjRef, Value};

/// Open-addressed hash table with linear probing, keyed by interned
/// strings. Serves both as the globals table and, with nil values, as the
/// string intern set.
///
/// Keys compare by `ObjRef` (sound because keys are interned); hashing and
/// byte comparison go through the heap that owns the string bytes, so the
/// probing methods take `&Heap`.
pub struct Table {
    /// Live entries plus tombstones. Tombstones keep their slot in the
    /// probe chain until the next growth discards them.
    count: usize,
    entries: Vec<Entry>,
}

#[derive(Clone, Copy)]
struct Entry {
    key: Option<ObjRef>,
    value: Value,
}

impl Entry {
    const EMPTY: Entry = Entry { key: None, value: Value::Nil };
    const TOMBSTONE: Entry = Entry { key: None, value: Value::Bool(true) };

    fn is_empty(&self) -> bool {
        self.key.is_none() && matches!(self.value, Value::Nil)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self { count: 0, entries: vec![] }
    }

    /// Slot for `key`: its occupied slot if present, otherwise the first
    /// tombstone passed on the probe, otherwise the terminating empty slot.
    fn find_entry(entries: &[Entry], heap: &Heap, key: ObjRef) -> usize {
        let cap = entries.len();
        let mut index = heap.string(key).hash as usize % cap;
        let mut tombstone = None;
        loop {
            let entry = &entries[index];
            match entry.key {
                None => {
                    if entry.is_empty() {
                        return tombstone.unwrap_or(index);
                    }
                    if tombstone.is_none() {
                        tombstone = Some(index);
                    }
                }
                Some(k) if k == key => return index,
                Some(_) => {}
            }
            index = (index + 1) % cap;
        }
    }

    pub fn get(&self, heap: &Heap, key: ObjRef) -> Option<Value> {
        if self.count == 0 {
            return None;
        }
        let entry = &self.entries[Self::find_entry(&self.entries, heap, key)];
        entry.key.map(|_| entry.value)
    }

    /// Inserts or overwrites; returns true iff the key was not present.
    pub fn set(&mut self, heap: &Heap, key: ObjRef, value: Value) -> bool {
        if self.count + 1 > self.entries.len() * 3 / 4 {
            let cap = if self.entries.len() < 8 { 8 } else { self.entries.len() * 2 };
            self.adjust_capacity(heap, cap);
        }
        let index = Self::find_entry(&self.entries, heap, key);
        let entry = &mut self.entries[index];
        let is_new = entry.key.is_none();
        // A reused tombstone was already counted.
        if is_new && entry.is_empty() {
            self.count += 1;
        }
        *entry = Entry { key: Some(key), value };
        is_new
    }

    /// Replaces the entry with a tombstone; returns true iff the key was
    /// present.
    pub fn delete(&mut self, heap: &Heap, key: ObjRef) -> bool {
        if self.count == 0 {
            return false;
        }
        let index = Self::find_entry(&self.entries, heap, key);
        if self.entries[index].key.is_none() {
            return false;
        }
        self.entries[index] = Entry::TOMBSTONE;
        true
    }

    /// Content lookup used to dedupe a string before it is allocated:
    /// compares hash, then bytes.
    pub fn find_string(&self, heap: &Heap, text: &str, hash: u32) -> Option<ObjRef> {
        if self.count == 0 {
            return None;
        }
        let cap = self.entries.len();
        let mut index = hash as usize % cap;
        loop {
            let entry = &self.entries[index];
            match entry.key {
                None => {
                    if entry.is_empty() {
                        return None;
                    }
                }
                Some(k) => {
                    let s = heap.string(k);
                    if s.hash == hash && s.text == text {
                        return Some(k);
                    }
                }
            }
            index = (index + 1) % cap;
        }
    }

    fn adjust_capacity(&mut self, heap: &Heap, cap: usize) {
        let old = std::mem::replace(&mut self.entries, vec![Entry::EMPTY; cap]);
        self.count = 0;
        for entry in old {
            if let Some(key) = entry.key {
                let index = Self::find_entry(&self.entries, heap, key);
                self.entries[index] = entry;
                self.count += 1;
            }
        }
    }
}
