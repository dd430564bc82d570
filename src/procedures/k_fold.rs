use rand::seq::SliceRandom;
use rand::Rng;

use super::FrozenSets;
use crate::error::{Error, Result};

/// k-fold cross-validation with a random fold assignment
#[derive(Debug, Clone, Copy)]
pub struct KFold {
    n_folds: usize,
}

impl KFold {
    pub fn new(n_folds: usize) -> Self {
        KFold { n_folds }
    }

    /// Assign every row to one of the folds.
    ///
    /// The labels `0..k` are repeated `ceil(n / k)` times, shuffled, and the first `n` are dealt
    /// to the rows, so fold sizes differ by at most a few rows.
    pub fn split<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<FrozenSets> {
        let k = self.n_folds;
        if k < 2 || k > n {
            return Err(Error::InsufficientData {
                required: k.max(2),
                available: if k < 2 { k } else { n },
            });
        }

        let per_fold = (n + k - 1) / k;
        let mut labels: Vec<usize> = (0..k).cycle().take(per_fold * k).collect();
        labels.shuffle(rng);
        labels.truncate(n);

        Ok(FrozenSets::from_labels(&labels, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedures::Procedure;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_row_is_tested_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let sets = KFold::new(10).split(103, &mut rng).unwrap();

        let mut tested: Vec<usize> = sets.iter().flat_map(|f| f.testset.clone()).collect();
        tested.sort();
        assert_eq!(tested, (0..103).collect::<Vec<_>>());

        for fold in sets.iter() {
            assert_eq!(fold.trainset.len() + fold.testset.len(), 103);
            assert!(fold.testset.len() <= 11);
        }
    }

    #[test]
    fn n_folds_equal_to_rows_is_leave_one_out() {
        let mut rng = StdRng::seed_from_u64(7);
        let sets = KFold::new(6).split(6, &mut rng).unwrap();
        assert_eq!(sets.len(), 6);
        assert!(sets.iter().all(|f| f.testset.len() == 1));
    }

    #[test]
    fn a_single_fold_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        match KFold::new(1).split(10, &mut rng) {
            Err(Error::InsufficientData { .. }) => {}
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn more_folds_than_rows_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(KFold::new(11).split(10, &mut rng).is_err());
    }
}
