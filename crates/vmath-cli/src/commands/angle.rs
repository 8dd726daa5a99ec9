//! Angle command - polar angle of a 2D vector

use crate::{
    AngleArgs,
    commands::{Vector, parse_vector},
};
use anyhow::{Result, bail};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: AngleArgs, delimiter: char) -> Result<()> {
    let radians = match parse_vector(&args.vector, delimiter)? {
        Vector::V2(v) => v.angle(),
        Vector::V3(_) => bail!("angle is defined for 2D vectors only"),
    };

    if args.degrees {
        println!("{}", radians.to_degrees());
    } else {
        println!("{}", radians);
    }

    Ok(())
}
