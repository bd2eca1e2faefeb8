use clsx::clsx_const;

const CARD: &str = clsx_const!("card", { "card-flat": true, "card-raised": false }, [1, 0, 2u64]);

fn main() {
    assert_eq!(CARD, "card card-flat 1 2");
}
