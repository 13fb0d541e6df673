use parameters_example::ParametersExample;
use paramex::prelude::*;

fn main() {
    if !paramex_export_standalone::<ParametersExample>() {
        std::process::exit(1);
    }
}
