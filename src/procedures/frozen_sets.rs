use super::{Fold, Procedure};

/// A fixed list of folds, drawn once and replayed for every model that is validated on them.
#[derive(Debug, Clone)]
pub struct FrozenSets {
    pub(crate) folds: Vec<Fold>,
}

impl FrozenSets {
    /// Build folds from a per-row fold label in `0..n_folds`.
    ///
    /// Row `i` is tested in fold `labels[i]` and used for training in every other fold.
    pub(crate) fn from_labels(labels: &[usize], n_folds: usize) -> Self {
        let mut folds = vec![Fold::new(); n_folds];

        for (row, &label) in labels.iter().enumerate() {
            for (k, fold) in folds.iter_mut().enumerate() {
                if k == label {
                    fold.testset.push(row);
                } else {
                    fold.trainset.push(row);
                }
            }
        }

        folds.retain(|fold| !fold.testset.is_empty());
        FrozenSets { folds }
    }

    pub fn len(&self) -> usize {
        self.folds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }
}

impl Procedure for FrozenSets {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a> {
        Box::new(self.folds.iter())
    }
}

#[test]
fn labels_partition_rows() {
    let sets = FrozenSets::from_labels(&[1, 0, 1, 2], 3);

    assert_eq!(sets.len(), 3);
    assert_eq!(sets.folds[0].testset, vec![1]);
    assert_eq!(sets.folds[0].trainset, vec![0, 2, 3]);
    assert_eq!(sets.folds[1].testset, vec![0, 2]);
    assert_eq!(sets.folds[2].trainset, vec![0, 1, 2]);
}

#[test]
fn empty_folds_are_dropped() {
    let sets = FrozenSets::from_labels(&[0, 0, 2], 3);
    assert_eq!(sets.len(), 2);
    assert_eq!(sets.iter().map(|f| f.testset.len()).sum::<usize>(), 3);
}
