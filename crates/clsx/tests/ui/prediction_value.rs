use clsx::{Prediction, predict};

fn main() {
    let count = 3_u16;
    let prediction: Prediction = predict!("badge", count as f64, [f64::NAN]);

    assert_eq!(prediction.to_string(), "`badge ${number} ${number}`");
    assert!(prediction.matches("badge 3 NaN"));
}
