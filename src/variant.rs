use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::call::Call;
use crate::types::{InfoValue, RefVar};

/// Hands out locus ids: unique, strictly increasing, never reused. Owned by
/// whatever constructs [`Variants`] instances; the atomic increment keeps ids
/// unique even when loci are built from multiple threads.
#[derive(Debug, Default)]
pub struct VariantIdAllocator {
    next: AtomicU64,
}

impl VariantIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Everything known about one locus: its span, the candidate variations, and
/// one [`Call`] per sample, with a parallel set of ambiguous allele indices
/// per call.
///
/// INFO access treats the per-call records as one logical store: reads return
/// the first call's value that carries information, writes broadcast to every
/// call's record so the per-sample copies stay consistent.
#[derive(Debug)]
pub struct Variants {
    id: u64,
    pub chr: String,
    pub pos: i64,
    pub len: i64,
    pub variation: Vec<RefVar>,
    pub calls: Vec<Call>,
    pub ambiguous_alleles: Vec<BTreeSet<i32>>,
}

impl Variants {
    pub fn new(ids: &VariantIdAllocator, chr: impl Into<String>, pos: i64, len: i64) -> Self {
        Self {
            id: ids.next_id(),
            chr: chr.into(),
            pos,
            len,
            variation: Vec::new(),
            calls: Vec::new(),
            ambiguous_alleles: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Append a call, keeping the ambiguous-allele sets parallel to `calls`.
    pub fn add_call(&mut self, call: Call) {
        self.calls.push(call);
        self.ambiguous_alleles.push(BTreeSet::new());
    }

    /// Mark an allele index of the given call as ambiguous.
    pub fn flag_ambiguous(&mut self, call_idx: usize, allele: i32) {
        self.ambiguous_alleles[call_idx].insert(allele);
    }

    pub fn any_ambiguous(&self) -> bool {
        self.ambiguous_alleles.iter().any(|x| !x.is_empty())
    }

    /// First call in stored order whose record has a value for `key`; `None`
    /// if no call does.
    pub fn info_int(&self, key: &str) -> Option<i32> {
        self.calls.iter().find_map(|c| c.record.info_int(key))
    }

    pub fn info_float(&self, key: &str) -> Option<f32> {
        self.calls.iter().find_map(|c| c.record.info_float(key))
    }

    pub fn info_string(&self, key: &str) -> Option<String> {
        self.calls.iter().find_map(|c| c.record.info_string(key))
    }

    /// True if any call's record has the flag set.
    pub fn info_flag(&self, key: &str) -> bool {
        self.calls.iter().any(|c| c.record.has_flag(key))
    }

    /// Broadcast `value` to every call's record. Not transactional: if a
    /// record rejects the update, records earlier in call order have already
    /// been written.
    pub fn set_info_int(&self, key: &str, value: i32) -> anyhow::Result<()> {
        for c in &self.calls {
            c.record.update_info(key, InfoValue::Int(value))?;
        }
        Ok(())
    }

    pub fn set_info_float(&self, key: &str, value: f32) -> anyhow::Result<()> {
        for c in &self.calls {
            c.record.update_info(key, InfoValue::Float(value))?;
        }
        Ok(())
    }

    pub fn set_info_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        for c in &self.calls {
            c.record.update_info(key, InfoValue::String(value.to_owned()))?;
        }
        Ok(())
    }

    /// Setting a flag to `false` deletes the field instead of storing a
    /// negative value, so a later read sees "not present".
    pub fn set_info_flag(&self, key: &str, value: bool) -> anyhow::Result<()> {
        if !value {
            self.del_info(key);
            return Ok(());
        }
        for c in &self.calls {
            c.record.update_info(key, InfoValue::Flag)?;
        }
        Ok(())
    }

    /// Remove the field from every call's record.
    pub fn del_info(&self, key: &str) {
        for c in &self.calls {
            c.record.delete_info(key);
        }
    }
}

impl fmt::Display for Variants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.pos, self.pos + self.len - 1)?;
        for rv in &self.variation {
            write!(f, " {}", rv)?;
        }
        for call in &self.calls {
            write!(f, " {}", call)?;
        }
        if self.any_ambiguous() {
            write!(f, "ambig[")?;
            for alleles in &self.ambiguous_alleles {
                for allele in alleles {
                    write!(f, "{} ", allele)?;
                }
                write!(f, ";")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
