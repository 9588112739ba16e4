use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use dgm::graph_models::FactorGraph;
use errors::*;

/// Read a factor graph stored as `{"factors": [{"vars": [...], "values": [...]}, ...]}`
pub fn read_factor_graph(finput: &Path) -> Result<FactorGraph> {
    let file = File::open(finput)
        .chain_err(|| format!("Cannot open factor graph file {}", finput.display()))?;
    let fg = FactorGraph::from_reader(BufReader::new(file))
        .chain_err(|| format!("Invalid factor graph in {}", finput.display()))?;

    Ok(fg)
}
