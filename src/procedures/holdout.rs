use rand::seq::SliceRandom;
use rand::Rng;

use super::{Fold, FrozenSets};
use crate::error::{Error, Result};

/// Single random train/test split
#[derive(Debug, Clone, Copy)]
pub struct Holdout {
    train_fraction: f64,
}

impl Holdout {
    pub fn new(train_fraction: f64) -> Self {
        Holdout { train_fraction }
    }

    /// Permute the rows and take the first `floor(train_fraction * n)` for training; the rest
    /// are tested.
    pub fn split<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<FrozenSets> {
        let n_train = (self.train_fraction * n as f64).floor() as usize;
        if n_train == 0 || n_train >= n {
            return Err(Error::InsufficientData {
                required: 2,
                available: n,
            });
        }

        let mut rows: Vec<usize> = (0..n).collect();
        rows.shuffle(rng);

        let testset = rows.split_off(n_train);
        let fold = Fold {
            trainset: rows,
            testset,
        };

        Ok(FrozenSets { folds: vec![fold] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seventy_thirty() {
        let mut rng = StdRng::seed_from_u64(1);
        let sets = Holdout::new(0.7).split(777, &mut rng).unwrap();
        let fold = &sets.folds[0];

        assert_eq!(fold.trainset.len(), 543);
        assert_eq!(fold.testset.len(), 234);

        let mut all: Vec<usize> = fold.trainset.iter().chain(&fold.testset).cloned().collect();
        all.sort();
        assert_eq!(all, (0..777).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_split() {
        let a = Holdout::new(0.7)
            .split(50, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = Holdout::new(0.7)
            .split(50, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a.folds, b.folds);
    }

    #[test]
    fn too_few_rows() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Holdout::new(0.7).split(1, &mut rng).is_err());
    }
}
