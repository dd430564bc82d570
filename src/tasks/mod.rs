mod regression_task;

pub use self::regression_task::RegressionTask;
