//! Add command - component-wise vector sum

use crate::{
    AddArgs,
    commands::{VectorPair, parse_pair},
};
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: AddArgs, delimiter: char) -> Result<()> {
    match parse_pair(&args.a, &args.b, delimiter)? {
        VectorPair::V2(a, b) => {
            debug!("{:?} + {:?}", a, b);
            println!("{}", a + b);
        }
        VectorPair::V3(a, b) => {
            debug!("{:?} + {:?}", a, b);
            println!("{}", a + b);
        }
    }

    Ok(())
}
