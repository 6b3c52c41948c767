use std::fmt;
use std::rc::Rc;

use itertools::Itertools;
use strum::Display;

use crate::record::RecordHandle;

/// Classification of a call's allele pattern.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display)]
pub enum GtType {
    #[strum(serialize = "gt_unknown")]
    Unknown,
    #[strum(serialize = "gt_haploid")]
    Haploid,
    #[strum(serialize = "gt_homref")]
    Homref,
    #[strum(serialize = "gt_homalt")]
    Homalt,
    #[strum(serialize = "gt_het")]
    Het,
    #[strum(serialize = "gt_hetalt")]
    Hetalt,
}

impl Default for GtType {
    fn default() -> Self {
        GtType::Unknown
    }
}

/// One sample's genotype call at a locus.
#[derive(Debug, Clone)]
pub struct Call {
    /// Allele indices; 0 is the reference allele, positive values index the
    /// alternate alleles, negative values are missing. The ploidy of the call
    /// is the length of this vector.
    pub alleles: Vec<i32>,
    /// Whether allele order carries haplotype information.
    pub phased: bool,
    /// Filter tags, in insertion order.
    pub filters: Vec<String>,
    /// The underlying record this call was read from; calls read from the
    /// same record share the same handle.
    pub record: Rc<RecordHandle>,
}

impl Call {
    pub fn new(record: Rc<RecordHandle>, alleles: Vec<i32>, phased: bool) -> Self {
        Self {
            alleles,
            phased,
            filters: Vec::new(),
            record,
        }
    }

    pub fn ploidy(&self) -> usize {
        self.alleles.len()
    }

    /// True when no allele carries information, i.e. ploidy 0 or all alleles
    /// missing.
    pub fn is_nocall(&self) -> bool {
        self.alleles.iter().all(|&a| a < 0)
    }

    /// Classify the genotype shape of this call.
    ///
    /// Total over all inputs: ploidy 0, ploidy above 2, and any unhandled
    /// missing-allele combination classify as [`GtType::Unknown`] rather than
    /// failing, since sparse and partial genotypes are routine in real
    /// call sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    /// use varlocus::{Call, GtType, Header, RecordHandle};
    ///
    /// let header = Rc::new(Header::default());
    /// let record = RecordHandle::new(header);
    /// let call = Call::new(record, vec![0, 1], false);
    /// assert_eq!(call.gt_type(), GtType::Het);
    /// ```
    pub fn gt_type(&self) -> GtType {
        match self.alleles.as_slice() {
            [a] if *a > 0 => GtType::Haploid,
            [0] => GtType::Homref,
            [0, 0] => GtType::Homref,
            [0, b] if *b > 0 => GtType::Het,
            [a, 0] if *a > 0 => GtType::Het,
            [a, b] if *a > 0 && *b > 0 && a == b => GtType::Homalt,
            [a, b] if *a > 0 && *b > 0 => GtType::Hetalt,
            _ => GtType::Unknown,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alleles.is_empty() {
            write!(f, ".")?;
        } else {
            let sep = if self.phased { "|" } else { "/" };
            write!(f, "{}", self.alleles.iter().join(sep))?;
        }
        if !self.filters.is_empty() {
            write!(f, " {}", self.filters.iter().join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::record::Header;

    fn call(alleles: Vec<i32>) -> Call {
        Call::new(RecordHandle::new(Rc::new(Header::default())), alleles, false)
    }

    #[test]
    fn ploidy_zero_is_unknown() {
        assert_eq!(call(vec![]).gt_type(), GtType::Unknown);
    }

    #[test]
    fn haploid_patterns() {
        assert_eq!(call(vec![5]).gt_type(), GtType::Haploid);
        assert_eq!(call(vec![0]).gt_type(), GtType::Homref);
        assert_eq!(call(vec![-1]).gt_type(), GtType::Unknown);
    }

    #[test]
    fn diploid_patterns() {
        assert_eq!(call(vec![0, 0]).gt_type(), GtType::Homref);
        assert_eq!(call(vec![0, 3]).gt_type(), GtType::Het);
        assert_eq!(call(vec![3, 0]).gt_type(), GtType::Het);
        assert_eq!(call(vec![2, 2]).gt_type(), GtType::Homalt);
        assert_eq!(call(vec![2, 3]).gt_type(), GtType::Hetalt);
    }

    #[test]
    fn diploid_with_missing_alleles_is_unknown() {
        assert_eq!(call(vec![0, -1]).gt_type(), GtType::Unknown);
        assert_eq!(call(vec![-1, 0]).gt_type(), GtType::Unknown);
        assert_eq!(call(vec![-1, -1]).gt_type(), GtType::Unknown);
        assert_eq!(call(vec![-1, 2]).gt_type(), GtType::Unknown);
    }

    #[test]
    fn ploidy_above_two_is_unknown() {
        assert_eq!(call(vec![1, 1, 1]).gt_type(), GtType::Unknown);
        assert_eq!(call(vec![0, 0, 0, 0]).gt_type(), GtType::Unknown);
    }

    #[test]
    fn gt_type_names() {
        assert_eq!(GtType::Unknown.to_string(), "gt_unknown");
        assert_eq!(GtType::Haploid.to_string(), "gt_haploid");
        assert_eq!(GtType::Homref.to_string(), "gt_homref");
        assert_eq!(GtType::Homalt.to_string(), "gt_homalt");
        assert_eq!(GtType::Het.to_string(), "gt_het");
        assert_eq!(GtType::Hetalt.to_string(), "gt_hetalt");
        assert_eq!(GtType::default().to_string(), "gt_unknown");
    }

    #[test]
    fn ploidy_is_the_allele_count() {
        assert_eq!(call(vec![]).ploidy(), 0);
        assert_eq!(call(vec![1]).ploidy(), 1);
        assert_eq!(call(vec![0, 1]).ploidy(), 2);
    }

    #[test]
    fn nocall_detection() {
        assert!(call(vec![]).is_nocall());
        assert!(call(vec![-1, -1]).is_nocall());
        assert!(!call(vec![0, -1]).is_nocall());
        assert!(!call(vec![0, 1]).is_nocall());
    }

    #[test]
    fn rendering_separator_follows_phasing() {
        let mut c = call(vec![0, 1]);
        assert_eq!(c.to_string(), "0/1");
        c.phased = true;
        assert_eq!(c.to_string(), "0|1");
    }

    #[test]
    fn rendering_empty_call_and_filters() {
        let mut c = call(vec![]);
        assert_eq!(c.to_string(), ".");
        c.filters = vec!["LowQual".into(), "OffTarget".into()];
        assert_eq!(c.to_string(), ". LowQual,OffTarget");
    }

    #[test]
    fn rendering_is_deterministic() {
        let c = call(vec![1, -1]);
        assert_eq!(c.to_string(), c.to_string());
    }
}
