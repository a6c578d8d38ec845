// SPDX-License-Identifier: MPL-2.0

use uiset::{SetError, UISet};

// Combine two sets given in notation, e.g.
// cargo run --example notation -- "(-inf, 0], [3, 8)" "{-4}, [5, 10]"
fn main() -> Result<(), SetError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let a: UISet<f64> = args.next().as_deref().unwrap_or("(-inf, 0], [3, 8)").parse()?;
    let b: UISet<f64> = args.next().as_deref().unwrap_or("{-4}, [5, 10]").parse()?;

    println!("a       = {a}");
    println!("b       = {b}");
    println!("a | b   = {}", &a | &b);
    println!("a & b   = {}", &a & &b);
    println!("a - b   = {}", &a - &b);
    println!("a ^ b   = {}", &a ^ &b);
    println!("!a      = {}", !&a);
    match a.partial_cmp(&b) {
        Some(ordering) => println!("a vs b  = {ordering:?}"),
        None => println!("a vs b  = neither contains the other"),
    }
    Ok(())
}
