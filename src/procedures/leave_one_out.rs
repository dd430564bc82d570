use super::{Fold, FrozenSets};

/// Leave-one-out: every row is the test set of its own fold
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveOneOut;

impl LeaveOneOut {
    pub fn split(&self, n: usize) -> FrozenSets {
        let folds = (0..n)
            .map(|i| Fold {
                trainset: (0..n).filter(|&j| j != i).collect(),
                testset: vec![i],
            })
            .collect();

        FrozenSets { folds }
    }
}

#[test]
fn one_fold_per_row() {
    let sets = LeaveOneOut.split(3);
    assert_eq!(sets.len(), 3);
    assert_eq!(sets.folds[1].testset, vec![1]);
    assert_eq!(sets.folds[1].trainset, vec![0, 2]);
}
