//! Cross product command - 3D vector or 2D signed area

use crate::{
    CrossArgs,
    commands::{VectorPair, parse_pair},
};
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: CrossArgs, delimiter: char) -> Result<()> {
    match parse_pair(&args.a, &args.b, delimiter)? {
        VectorPair::V2(a, b) => {
            debug!("signed area of {:?} x {:?}", a, b);
            println!("{}", a.cross(b));
        }
        VectorPair::V3(a, b) => {
            debug!("{:?} x {:?}", a, b);
            println!("{}", a.cross(b));
        }
    }

    Ok(())
}
