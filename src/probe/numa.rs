use std::{fs, path::Path};

use crate::error::{HarnessErr, Result};

/// Hardware threads grouped by NUMA node, indexed by node id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumaTopology {
    nodes: Vec<Vec<usize>>,
}

impl NumaTopology {
    pub fn new(nodes: Vec<Vec<usize>>) -> Self {
        Self { nodes }
    }

    /// Reads every `node<N>/cpulist` under `root` (normally
    /// `/sys/devices/system/node`).
    pub fn from_sysfs(root: &Path) -> Result<Self> {
        let mut nodes = Vec::new();
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(id) = name
                .to_str()
                .and_then(|n| n.strip_prefix("node"))
                .and_then(|n| n.parse::<usize>().ok())
            else {
                continue;
            };

            let list = fs::read_to_string(entry.path().join("cpulist"))?;
            nodes.push((id, parse_cpu_list(&list)?));
        }

        nodes.sort_by_key(|(id, _)| *id);
        Ok(Self::new(nodes.into_iter().map(|(_, cpus)| cpus).collect()))
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn threads(&self, node: usize) -> Option<&[usize]> {
        self.nodes.get(node).map(Vec::as_slice)
    }

    /// Splits the threads of `node` in two halves: the first for data
    /// loading, the second for compute.
    pub fn load_compute_cores(&self, node: usize) -> Option<(&[usize], &[usize])> {
        let threads = self.threads(node)?;
        Some(threads.split_at(threads.len() / 2))
    }
}

/// Parses a kernel cpu list such as `0-3,8,10-11`.
pub fn parse_cpu_list(list: &str) -> Result<Vec<usize>> {
    let invalid = || HarnessErr::InvalidArgument(format!("malformed cpu list {list:?}"));
    let mut cpus: Vec<usize> = Vec::new();

    for part in list.trim().split(',').filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((lo, hi)) => {
                let lo: usize = lo.parse().map_err(|_| invalid())?;
                let hi: usize = hi.parse().map_err(|_| invalid())?;
                if lo > hi {
                    return Err(invalid());
                }
                cpus.extend(lo..=hi);
            }
            None => cpus.push(part.parse::<usize>().map_err(|_| invalid())?),
        }
    }

    Ok(cpus)
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    #[test]
    fn cpu_lists() {
        assert_eq!(parse_cpu_list("0-3,8,10-11\n").unwrap(), vec![0, 1, 2, 3, 8, 10, 11]);
        assert_eq!(parse_cpu_list("5").unwrap(), vec![5]);
        assert!(parse_cpu_list("").unwrap().is_empty());
        assert!(parse_cpu_list("3-1").is_err());
        assert!(parse_cpu_list("a-b").is_err());
    }

    #[test]
    fn halves_for_loading_and_compute() {
        let topo = NumaTopology::new(vec![vec![0, 1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(topo.num_nodes(), 2);
        assert_eq!(topo.load_compute_cores(0), Some((&[0, 1][..], &[2, 3][..])));
        assert_eq!(topo.load_compute_cores(1), Some((&[4][..], &[5, 6][..])));
        assert_eq!(topo.load_compute_cores(2), None);
    }

    #[test]
    fn reads_sysfs_layout() {
        let root = env::temp_dir().join(format!("gnn-bench-numa-{}", process::id()));
        for (node, list) in [("node1", "4-7"), ("node0", "0-3"), ("possible", "")] {
            let dir = root.join(node);
            fs::create_dir_all(&dir).unwrap();
            if node.starts_with("node") {
                fs::write(dir.join("cpulist"), list).unwrap();
            }
        }

        let topo = NumaTopology::from_sysfs(&root).unwrap();
        fs::remove_dir_all(&root).unwrap();

        assert_eq!(topo.num_nodes(), 2);
        assert_eq!(topo.threads(0), Some(&[0, 1, 2, 3][..]));
        assert_eq!(topo.threads(1), Some(&[4, 5, 6, 7][..]));
    }
}
