//! Dot product command

use crate::{
    DotArgs,
    commands::{VectorPair, parse_pair},
};
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: DotArgs, delimiter: char) -> Result<()> {
    let result = match parse_pair(&args.a, &args.b, delimiter)? {
        VectorPair::V2(a, b) => a.dot(b),
        VectorPair::V3(a, b) => a.dot(b),
    };

    println!("{}", result);

    Ok(())
}
