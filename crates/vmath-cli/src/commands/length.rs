//! Length command - vector magnitude

use crate::{
    LengthArgs,
    commands::{Vector, parse_vector},
};
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: LengthArgs, delimiter: char) -> Result<()> {
    let (length, squared) = match parse_vector(&args.vector, delimiter)? {
        Vector::V2(v) => {
            debug!("parsed {:?}", v);
            (v.length(), v.length_squared())
        }
        Vector::V3(v) => {
            debug!("parsed {:?}", v);
            (v.length(), v.length_squared())
        }
    };

    println!("length: {}", length);
    println!("squared: {}", squared);

    Ok(())
}
