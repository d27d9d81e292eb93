//! Append-only hash-consing table.
//!
//! Values are stored densely in insertion order, so an index into the table is also
//! the value's discovery index. Lookup goes through hash buckets chained by `next`
//! links, in the same spirit as a unique table for decision-diagram nodes. The bucket
//! array doubles whenever the load factor exceeds two entries per bucket.

use std::collections::TryReserveError;
use std::ops::Index;

use log::debug;

use crate::utils::MyHash;

const NIL: usize = usize::MAX;

struct Entry<T> {
    value: T,
    hash: u64,
    next: usize,
}

pub struct Table<T> {
    data: Vec<Entry<T>>,
    buckets: Vec<usize>,
    bitmask: u64,
    hits: usize,
    misses: usize,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new(10)
    }
}

impl<T> Table<T> {
    /// Creates an empty table with `2^bits` initial buckets.
    pub fn new(bits: usize) -> Self {
        assert!(bits <= 31, "Table bits should be in the range 0..=31");

        let buckets_size = 1 << bits;
        Self {
            data: Vec::new(),
            buckets: vec![NIL; buckets_size],
            bitmask: (buckets_size - 1) as u64,
            hits: 0,
            misses: 0,
        }
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of buckets.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Number of successful lookups.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of failed lookups.
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn value(&self, index: usize) -> &T {
        &self.data[index].value
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|e| &e.value)
    }

    /// Consumes the table, returning the values in insertion order.
    pub fn into_values(self) -> Vec<T> {
        self.data.into_iter().map(|e| e.value).collect()
    }

    fn bucket_index(&self, hash: u64) -> usize {
        (hash & self.bitmask) as usize
    }

    fn grow(&mut self) {
        let buckets_size = self.buckets.len() * 2;
        debug!(
            "table: growing to {} buckets for {} values",
            buckets_size,
            self.data.len()
        );
        self.buckets = vec![NIL; buckets_size];
        self.bitmask = (buckets_size - 1) as u64;
        for index in 0..self.data.len() {
            let bucket = self.bucket_index(self.data[index].hash);
            self.data[index].next = self.buckets[bucket];
            self.buckets[bucket] = index;
        }
    }
}

impl<T> Table<T>
where
    T: MyHash + Eq,
{
    /// Looks a value up, returning its index if present.
    pub fn find(&mut self, value: &T) -> Option<usize> {
        let hash = value.hash();
        let mut index = self.buckets[self.bucket_index(hash)];
        while index != NIL {
            let entry = &self.data[index];
            if entry.hash == hash && &entry.value == value {
                self.hits += 1;
                return Some(index);
            }
            index = entry.next;
        }
        self.misses += 1;
        None
    }

    /// Appends a value without checking whether it is already present, and returns
    /// its index.
    pub fn push(&mut self, value: T) -> Result<usize, TryReserveError> {
        self.data.try_reserve(1)?;
        if self.data.len() >= 2 * self.buckets.len() && self.buckets.len() < (1 << 31) {
            self.grow();
        }

        let hash = value.hash();
        let bucket = self.bucket_index(hash);
        let index = self.data.len();
        self.data.push(Entry {
            value,
            hash,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = index;
        Ok(index)
    }

    /// Returns the index of `value`, inserting it first if absent.
    pub fn put(&mut self, value: T) -> Result<usize, TryReserveError> {
        match self.find(&value) {
            Some(index) => Ok(index),
            None => self.push(value),
        }
    }
}

impl<T> Index<usize> for Table<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.value(index)
    }
}
