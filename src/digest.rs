//! SHA-256 content digest over a canonical encoding; stable across builds.

use crate::structural::float_bits;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub trait Canonical {
    fn write_canonical(&self, buf: &mut Vec<u8>);
}

pub(crate) fn write_str(buf: &mut Vec<u8>, value: &str) {
    let len = value.len() as u64;
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(value.as_bytes());
}

impl Canonical for String {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(0x04);
        write_str(buf, self);
    }
}

impl Canonical for i64 {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(0x01);
        buf.extend_from_slice(&self.to_be_bytes());
    }
}

impl Canonical for f64 {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(0x02);
        buf.extend_from_slice(&float_bits(*self).to_be_bytes());
    }
}

impl Canonical for bool {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(0x03);
        buf.push(if *self { 0x01 } else { 0x00 });
    }
}

impl Canonical for DateTime<Utc> {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(0x05);
        buf.extend_from_slice(&self.timestamp().to_be_bytes());
        buf.extend_from_slice(&self.timestamp_subsec_nanos().to_be_bytes());
    }
}

impl Canonical for Uuid {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(0x08);
        buf.extend_from_slice(self.as_bytes());
    }
}

impl<T: Canonical> Canonical for Option<T> {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        match self {
            Some(value) => {
                buf.push(0x01);
                value.write_canonical(buf);
            }
            None => buf.push(0x00),
        }
    }
}

impl<T: Canonical> Canonical for Vec<T> {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(0x06);
        let len = self.len() as u64;
        buf.extend_from_slice(&len.to_be_bytes());
        for item in self {
            item.write_canonical(buf);
        }
    }
}

impl<T: Canonical> Canonical for IndexMap<String, T> {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(0x07);
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();
        let len = keys.len() as u64;
        buf.extend_from_slice(&len.to_be_bytes());
        for key in keys {
            write_str(buf, key);
            if let Some(value) = self.get(key) {
                value.write_canonical(buf);
            }
        }
    }
}

impl Canonical for serde_json::Value {
    fn write_canonical(&self, buf: &mut Vec<u8>) {
        use serde_json::Value;

        match self {
            Value::Null => buf.push(0x10),
            Value::Bool(b) => {
                buf.push(0x11);
                buf.push(if *b { 0x01 } else { 0x00 });
            }
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() => {
                    buf.push(0x16);
                    buf.extend_from_slice(&float_bits(f).to_be_bytes());
                }
                _ => {
                    buf.push(0x12);
                    write_str(buf, &n.to_string());
                }
            },
            Value::String(s) => {
                buf.push(0x13);
                write_str(buf, s);
            }
            Value::Array(items) => {
                buf.push(0x14);
                let len = items.len() as u64;
                buf.extend_from_slice(&len.to_be_bytes());
                for item in items {
                    item.write_canonical(buf);
                }
            }
            Value::Object(map) => {
                buf.push(0x15);
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                let len = keys.len() as u64;
                buf.extend_from_slice(&len.to_be_bytes());
                for key in keys {
                    write_str(buf, key);
                    if let Some(value) = map.get(key) {
                        value.write_canonical(buf);
                    }
                }
            }
        }
    }
}

pub fn canonical_bytes<T: Canonical + ?Sized>(value: &T) -> Vec<u8> {
    let mut bytes = Vec::new();
    value.write_canonical(&mut bytes);
    bytes
}

pub fn content_digest<T: Canonical + ?Sized>(value: &T) -> [u8; 32] {
    let digest = Sha256::digest(canonical_bytes(value));
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

pub fn to_hex(digest: &[u8; 32]) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
