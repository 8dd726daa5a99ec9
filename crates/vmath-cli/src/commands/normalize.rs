//! Normalize command - scale to unit length

use crate::{
    NormalizeArgs,
    commands::{Vector, parse_vector},
};
use anyhow::{Context, Result};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: NormalizeArgs, delimiter: char) -> Result<()> {
    match parse_vector(&args.vector, delimiter)? {
        Vector::V2(v) => {
            let unit = v
                .try_normalized()
                .context("cannot normalize a zero-length vector")?;
            debug!("{:?} -> {:?}", v, unit);
            println!("{}", unit);
        }
        Vector::V3(v) => {
            let unit = v
                .try_normalized()
                .context("cannot normalize a zero-length vector")?;
            debug!("{:?} -> {:?}", v, unit);
            println!("{}", unit);
        }
    }

    Ok(())
}
