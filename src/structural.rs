//! Deep structural equality and the matching hash code.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

pub const HASH_SEED: i32 = 17;
pub const HASH_PRIME: i32 = 31;

/// Open, schema-unconstrained extension data attached to most nodes.
pub type PropertyBag = IndexMap<String, serde_json::Value>;

/// Running hash over a node's fields in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashAccumulator {
    result: i32,
}

impl HashAccumulator {
    pub fn new() -> Self {
        Self { result: HASH_SEED }
    }

    pub fn add(&mut self, hash: i32) {
        self.result = self.result.wrapping_mul(HASH_PRIME).wrapping_add(hash);
    }

    /// Shifts the accumulator without adding anything; marks a sequence slot.
    pub fn step(&mut self) {
        self.result = self.result.wrapping_mul(HASH_PRIME);
    }

    pub fn finish(self) -> i32 {
        self.result
    }
}

impl Default for HashAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Structural {
    fn structural_eq(&self, other: &Self) -> bool;

    fn structural_hash(&self) -> i32;

    /// Folds this value into the hash of the node that owns it.
    fn fold_into(&self, acc: &mut HashAccumulator) {
        acc.add(self.structural_hash());
    }
}

/// Null-aware structural equality. Two absent values are equal, one absent
/// value never is.
pub fn equals<T: Structural>(left: Option<&T>, right: Option<&T>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => std::ptr::eq(l, r) || l.structural_eq(r),
        (None, None) => true,
        _ => false,
    }
}

/// Null-aware structural hash; an absent value hashes to 0.
pub fn hash_code<T: Structural>(value: Option<&T>) -> i32 {
    value.map(Structural::structural_hash).unwrap_or(0)
}

pub(crate) fn scalar_hash<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    let h = hasher.finish();
    (h ^ (h >> 32)) as i32
}

macro_rules! impl_scalar_structural {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Structural for $ty {
                fn structural_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn structural_hash(&self) -> i32 {
                    scalar_hash(self)
                }
            }
        )*
    };
}

impl_scalar_structural!(String, bool, i64, DateTime<Utc>, Uuid);

/// Collapses `-0.0` onto `0.0` and every NaN onto one bit pattern.
pub(crate) fn float_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Structural for f64 {
    fn structural_eq(&self, other: &Self) -> bool {
        float_bits(*self) == float_bits(*other)
    }

    fn structural_hash(&self) -> i32 {
        scalar_hash(&float_bits(*self))
    }
}

/// JSON floats compare like `f64` fields; integers compare exactly.
fn number_eq(left: &serde_json::Number, right: &serde_json::Number) -> bool {
    match (left.is_f64(), right.is_f64()) {
        (true, true) => left.as_f64().map(float_bits) == right.as_f64().map(float_bits),
        (false, false) => left == right,
        _ => false,
    }
}

fn number_hash(n: &serde_json::Number) -> i32 {
    match n.as_f64() {
        Some(f) if n.is_f64() => scalar_hash(&float_bits(f)),
        _ => scalar_hash(&n.to_string()),
    }
}

impl<T: Structural> Structural for Option<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        equals(self.as_ref(), other.as_ref())
    }

    fn structural_hash(&self) -> i32 {
        hash_code(self.as_ref())
    }

    fn fold_into(&self, acc: &mut HashAccumulator) {
        if let Some(value) = self {
            value.fold_into(acc);
        }
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(l, r)| l.structural_eq(r))
    }

    fn structural_hash(&self) -> i32 {
        let mut acc = HashAccumulator::new();
        self.fold_into(&mut acc);
        acc.finish()
    }

    fn fold_into(&self, acc: &mut HashAccumulator) {
        for item in self {
            acc.step();
            acc.add(item.structural_hash());
        }
    }
}

impl<T: Structural> Structural for IndexMap<String, T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| {
                other
                    .get(key)
                    .is_some_and(|other_value| value.structural_eq(other_value))
            })
    }

    fn structural_hash(&self) -> i32 {
        self.iter().fold(0, |xor, (key, value)| {
            xor ^ scalar_hash(key) ^ value.structural_hash()
        })
    }
}

impl Structural for serde_json::Value {
    fn structural_eq(&self, other: &Self) -> bool {
        use serde_json::Value;

        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => number_eq(l, r),
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Array(l), Value::Array(r)) => l.structural_eq(r),
            (Value::Object(l), Value::Object(r)) => {
                l.len() == r.len()
                    && l.iter().all(|(key, value)| {
                        r.get(key)
                            .is_some_and(|other_value| value.structural_eq(other_value))
                    })
            }
            _ => false,
        }
    }

    fn structural_hash(&self) -> i32 {
        use serde_json::Value;

        match self {
            Value::Null => 0,
            Value::Bool(b) => scalar_hash(b),
            Value::Number(n) => number_hash(n),
            Value::String(s) => scalar_hash(s),
            Value::Array(items) => items.structural_hash(),
            Value::Object(map) => map.iter().fold(0, |xor, (key, value)| {
                xor ^ scalar_hash(key) ^ value.structural_hash()
            }),
        }
    }
}
