//! # Calc
//!
//! An interactive desk calculator.
//!

fn main() {
    calc::term::main()
}
