use clsx::prelude::*;

fn classes(active: bool, size: u32) -> String {
    clsx!("item", { active: active, r#type: true }, format!("size-{size}"), vec![Some("x"), None])
}

fn main() {
    assert_eq!(classes(true, 2), "item active type size-2 x");
    assert_eq!(classes(false, 0), "item type size-0 x");
}
