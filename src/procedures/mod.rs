//! Validation procedures

mod frozen_sets;
mod holdout;
mod k_fold;
mod leave_one_out;

pub use self::frozen_sets::FrozenSets;
pub use self::holdout::Holdout;
pub use self::k_fold::KFold;
pub use self::leave_one_out::LeaveOneOut;

/// Validation procedures support iteration over cross-validation folds
pub trait Procedure {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a>;
}

/// A single cross-validation fold, consisting of a training set and a testing set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fold {
    pub trainset: Vec<usize>,
    pub testset: Vec<usize>,
}

impl Fold {
    pub fn new() -> Self {
        Fold {
            trainset: Vec::new(),
            testset: Vec::new(),
        }
    }
}
