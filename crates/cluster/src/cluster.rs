//! Cluster document: node counts, machine size and worker image.

use serde::{Deserialize, Serialize};

use crate::document::ConfigDocument;
use crate::error::ClusterError;

const MAX_NAME_LEN: usize = 64;

/// Rule the batch service uses to resize the pool between its bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoscaleFormula {
    /// Scale with the number of queued tasks.
    #[default]
    Queue,
    /// Scale with queued plus running tasks.
    QueueAndRunning,
    /// Maximum nodes during working hours on weekdays.
    Workday,
    /// Maximum nodes on weekends.
    Weekend,
    /// Scale with observed CPU utilisation.
    MaxCpu,
}

/// Inclusive bounds on the number of nodes in one pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeRange {
    /// Minimum node count.
    pub min: u32,
    /// Maximum node count.
    pub max: u32,
}

impl NodeRange {
    /// Creates a range; validated when the owning cluster is built.
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Creates a range with `min == max == n`.
    pub fn fixed(n: u32) -> Self {
        Self { min: n, max: n }
    }
}

/// Dedicated and low-priority node bounds plus the autoscale rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PoolSize {
    /// Dedicated nodes.
    pub dedicated_nodes: NodeRange,
    /// Pre-emptible low-priority nodes.
    pub low_priority_nodes: NodeRange,
    /// Autoscale rule.
    #[serde(default)]
    pub autoscale_formula: AutoscaleFormula,
}

impl Default for PoolSize {
    fn default() -> Self {
        Self {
            dedicated_nodes: NodeRange::fixed(3),
            low_priority_nodes: NodeRange::fixed(0),
            autoscale_formula: AutoscaleFormula::Queue,
        }
    }
}

/// The `cluster.json` document.
///
/// Build with [`ClusterConfig::builder`]; the builder validates on
/// [`build`](ClusterConfigBuilder::build).
///
/// # Example
///
/// ```
/// use birthday_cluster::{AutoscaleFormula, ClusterConfig, NodeRange};
///
/// let cluster = ClusterConfig::builder("birthday-pool", "Standard_D2_v2")
///     .with_dedicated_nodes(NodeRange::new(0, 8))
///     .with_autoscale_formula(AutoscaleFormula::QueueAndRunning)
///     .with_max_tasks_per_node(2)
///     .build()
///     .unwrap();
/// assert_eq!(cluster.pool_size().dedicated_nodes.max, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClusterConfig {
    name: String,
    vm_size: String,
    max_tasks_per_node: u32,
    pool_size: PoolSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    container_image: Option<String>,
    #[serde(default)]
    packages: Vec<String>,
    #[serde(default)]
    command_line: Vec<String>,
}

impl ClusterConfig {
    /// Starts a builder with defaults.
    ///
    /// Defaults: `max_tasks_per_node = 1`, 3 dedicated nodes, no
    /// low-priority nodes, `Queue` autoscaling, no container image, no
    /// packages, no start-up commands.
    pub fn builder(name: impl Into<String>, vm_size: impl Into<String>) -> ClusterConfigBuilder {
        ClusterConfigBuilder {
            config: Self {
                name: name.into(),
                vm_size: vm_size.into(),
                max_tasks_per_node: 1,
                pool_size: PoolSize::default(),
                container_image: None,
                packages: Vec::new(),
                command_line: Vec::new(),
            },
        }
    }

    /// Placeholder document written by
    /// [`generate_templates`](crate::generate_templates).
    pub fn template() -> Self {
        Self::builder("birthday-pool", "Standard_D2_v2").config
    }

    /// Returns the pool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the machine size identifier.
    pub fn vm_size(&self) -> &str {
        &self.vm_size
    }

    /// Returns the number of concurrent tasks per node.
    pub fn max_tasks_per_node(&self) -> u32 {
        self.max_tasks_per_node
    }

    /// Returns the pool bounds.
    pub fn pool_size(&self) -> &PoolSize {
        &self.pool_size
    }

    /// Returns the worker container image, if any.
    pub fn container_image(&self) -> Option<&str> {
        self.container_image.as_deref()
    }

    /// Returns packages installed on every node.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Returns commands run when a node starts.
    pub fn command_line(&self) -> &[String] {
        &self.command_line
    }

    /// Upper bound on tasks the pool can run at once.
    pub fn max_concurrent_tasks(&self) -> u64 {
        let nodes = u64::from(self.pool_size.dedicated_nodes.max)
            + u64::from(self.pool_size.low_priority_nodes.max);
        nodes * u64::from(self.max_tasks_per_node)
    }
}

fn validate_name(name: &str) -> Result<(), ClusterError> {
    let reason = if name.is_empty() {
        Some("must not be empty".to_string())
    } else if name.len() > MAX_NAME_LEN {
        Some(format!("longer than {MAX_NAME_LEN} characters"))
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Some("only ASCII letters, digits, '-' and '_' are allowed".to_string())
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ClusterError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn validate_range(range: NodeRange, pool: &'static str) -> Result<(), ClusterError> {
    if range.min > range.max {
        return Err(ClusterError::InvalidNodeRange {
            pool,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

impl ConfigDocument for ClusterConfig {
    const FILE_NAME: &'static str = "cluster.json";

    fn validate(&self) -> Result<(), ClusterError> {
        validate_name(&self.name)?;
        if self.vm_size.trim().is_empty() {
            return Err(ClusterError::EmptyField { field: "vmSize" });
        }
        if self.max_tasks_per_node == 0 {
            return Err(ClusterError::InvalidTasksPerNode { value: 0 });
        }
        validate_range(self.pool_size.dedicated_nodes, "dedicated")?;
        validate_range(self.pool_size.low_priority_nodes, "low-priority")?;
        if self.pool_size.dedicated_nodes.max == 0 && self.pool_size.low_priority_nodes.max == 0 {
            return Err(ClusterError::EmptyPool);
        }
        if let Some(image) = &self.container_image {
            if image.trim().is_empty() {
                return Err(ClusterError::EmptyField {
                    field: "containerImage",
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`ClusterConfig`].
#[derive(Debug, Clone)]
pub struct ClusterConfigBuilder {
    config: ClusterConfig,
}

impl ClusterConfigBuilder {
    /// Sets the number of concurrent tasks per node.
    pub fn with_max_tasks_per_node(mut self, n: u32) -> Self {
        self.config.max_tasks_per_node = n;
        self
    }

    /// Sets the dedicated node bounds.
    pub fn with_dedicated_nodes(mut self, range: NodeRange) -> Self {
        self.config.pool_size.dedicated_nodes = range;
        self
    }

    /// Sets the low-priority node bounds.
    pub fn with_low_priority_nodes(mut self, range: NodeRange) -> Self {
        self.config.pool_size.low_priority_nodes = range;
        self
    }

    /// Sets the autoscale rule.
    pub fn with_autoscale_formula(mut self, formula: AutoscaleFormula) -> Self {
        self.config.pool_size.autoscale_formula = formula;
        self
    }

    /// Sets the worker container image.
    pub fn with_container_image(mut self, image: impl Into<String>) -> Self {
        self.config.container_image = Some(image.into());
        self
    }

    /// Adds a package installed on every node.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.config.packages.push(package.into());
        self
    }

    /// Adds a command run when a node starts.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.config.command_line.push(command.into());
        self
    }

    /// Validates and returns the document.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ClusterError::InvalidName`] | empty, too long, or bad characters |
    /// | [`ClusterError::EmptyField`] | blank `vmSize` or `containerImage` |
    /// | [`ClusterError::InvalidTasksPerNode`] | `maxTasksPerNode == 0` |
    /// | [`ClusterError::InvalidNodeRange`] | `min > max` in either pool |
    /// | [`ClusterError::EmptyPool`] | both pools capped at zero nodes |
    pub fn build(self) -> Result<ClusterConfig, ClusterError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ClusterConfig::builder("pool", "Standard_D2_v2")
            .build()
            .unwrap();
        assert_eq!(c.name(), "pool");
        assert_eq!(c.vm_size(), "Standard_D2_v2");
        assert_eq!(c.max_tasks_per_node(), 1);
        assert_eq!(c.pool_size().dedicated_nodes, NodeRange::fixed(3));
        assert_eq!(c.pool_size().low_priority_nodes, NodeRange::fixed(0));
        assert_eq!(c.pool_size().autoscale_formula, AutoscaleFormula::Queue);
        assert!(c.container_image().is_none());
        assert!(c.packages().is_empty());
        assert!(c.command_line().is_empty());
    }

    #[test]
    fn builder_chaining() {
        let c = ClusterConfig::builder("mc_sim-01", "Standard_F4s")
            .with_max_tasks_per_node(4)
            .with_dedicated_nodes(NodeRange::new(1, 5))
            .with_low_priority_nodes(NodeRange::new(0, 20))
            .with_autoscale_formula(AutoscaleFormula::MaxCpu)
            .with_container_image("birthday/worker:latest")
            .with_package("birthday")
            .with_command("echo ready")
            .build()
            .unwrap();
        assert_eq!(c.max_concurrent_tasks(), 100);
        assert_eq!(c.container_image(), Some("birthday/worker:latest"));
        assert_eq!(c.packages(), &["birthday".to_string()]);
        assert_eq!(c.command_line(), &["echo ready".to_string()]);
    }

    #[test]
    fn template_is_valid() {
        assert!(ClusterConfig::template().validate().is_ok());
    }

    #[test]
    fn bad_names_rejected() {
        for name in ["", "has space", "dot.name", "x".repeat(65).as_str()] {
            let result = ClusterConfig::builder(name, "Standard_D2_v2").build();
            assert!(
                matches!(result, Err(ClusterError::InvalidName { .. })),
                "name {name:?} should be rejected"
            );
        }
        assert!(
            ClusterConfig::builder("x".repeat(64), "Standard_D2_v2")
                .build()
                .is_ok()
        );
    }

    #[test]
    fn blank_vm_size_rejected() {
        assert!(matches!(
            ClusterConfig::builder("pool", " ").build(),
            Err(ClusterError::EmptyField { field: "vmSize" })
        ));
    }

    #[test]
    fn zero_tasks_per_node_rejected() {
        assert!(matches!(
            ClusterConfig::builder("pool", "vm")
                .with_max_tasks_per_node(0)
                .build(),
            Err(ClusterError::InvalidTasksPerNode { value: 0 })
        ));
    }

    #[test]
    fn inverted_ranges_rejected() {
        assert!(matches!(
            ClusterConfig::builder("pool", "vm")
                .with_dedicated_nodes(NodeRange::new(4, 2))
                .build(),
            Err(ClusterError::InvalidNodeRange {
                pool: "dedicated",
                min: 4,
                max: 2
            })
        ));
        assert!(matches!(
            ClusterConfig::builder("pool", "vm")
                .with_low_priority_nodes(NodeRange::new(1, 0))
                .build(),
            Err(ClusterError::InvalidNodeRange {
                pool: "low-priority",
                ..
            })
        ));
    }

    #[test]
    fn empty_pool_rejected() {
        assert!(matches!(
            ClusterConfig::builder("pool", "vm")
                .with_dedicated_nodes(NodeRange::fixed(0))
                .build(),
            Err(ClusterError::EmptyPool)
        ));
        // Low-priority only is fine.
        assert!(
            ClusterConfig::builder("pool", "vm")
                .with_dedicated_nodes(NodeRange::fixed(0))
                .with_low_priority_nodes(NodeRange::new(0, 10))
                .build()
                .is_ok()
        );
    }

    #[test]
    fn blank_container_image_rejected() {
        assert!(matches!(
            ClusterConfig::builder("pool", "vm")
                .with_container_image("")
                .build(),
            Err(ClusterError::EmptyField {
                field: "containerImage"
            })
        ));
    }

    #[test]
    fn autoscale_formula_wire_names() {
        let names: Vec<String> = [
            AutoscaleFormula::Queue,
            AutoscaleFormula::QueueAndRunning,
            AutoscaleFormula::Workday,
            AutoscaleFormula::Weekend,
            AutoscaleFormula::MaxCpu,
        ]
        .iter()
        .map(|f| serde_json::to_string(f).unwrap())
        .collect();
        assert_eq!(
            names,
            [
                "\"QUEUE\"",
                "\"QUEUE_AND_RUNNING\"",
                "\"WORKDAY\"",
                "\"WEEKEND\"",
                "\"MAX_CPU\""
            ]
        );
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(ClusterConfig::template()).unwrap();
        assert_eq!(json["vmSize"], "Standard_D2_v2");
        assert_eq!(json["maxTasksPerNode"], 1);
        assert_eq!(json["poolSize"]["dedicatedNodes"]["max"], 3);
        assert_eq!(json["poolSize"]["autoscaleFormula"], "QUEUE");
        assert!(json.get("containerImage").is_none());
    }
}
