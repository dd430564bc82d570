extern crate log;
extern crate polycv;
extern crate simple_logger;

use std::env;

use log::Level;
use polycv::prelude::*;
use polycv::results::compare_methods;

fn main() {
    simple_logger::init_with_level(Level::Info).unwrap();

    // usage: college_cv <College.csv> [response] [predictor]
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("College.csv");
    let response = args.get(2).map(String::as_str).unwrap_or("Apps");
    let predictor = args.get(3).map(String::as_str).unwrap_or("Accept");

    let data = DataSet::from_csv_path(path).unwrap();

    println!("Data: {} rows, {} columns", data.n_rows(), data.n_cols());

    let config = EvaluatorConfig::default();
    let comparison = compare_methods(&data, response, predictor, &config).unwrap();

    for method in Method::all().iter() {
        println!("\n{} ~ poly({}) by {}", response, predictor, method);
        println!("{}", ResultsTable::from_mse(comparison.curve(*method).values()).unwrap());
    }

    println!("{}", comparison);
}
