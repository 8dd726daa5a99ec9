//! Lerp command - linear blend between two vectors

use crate::{
    LerpArgs,
    commands::{VectorPair, parse_pair},
};
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: LerpArgs, delimiter: char) -> Result<()> {
    debug!("blend factor t = {}", args.t);

    match parse_pair(&args.a, &args.b, delimiter)? {
        VectorPair::V2(a, b) => println!("{}", a.lerp(b, args.t)),
        VectorPair::V3(a, b) => println!("{}", a.lerp(b, args.t)),
    }

    Ok(())
}
