//! Tool execution engine

use crate::tools::base::Tool;
use crate::tools::types::{ToolCall, ToolResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Tool executor that dispatches calls to registered tools
///
/// Calls run one at a time in the order given. Time limits belong to the
/// collaborators a tool talks to, so the executor imposes none.
pub struct ToolExecutor {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Register multiple tools
    pub fn register_tools(&mut self, tools: Vec<Arc<dyn Tool>>) {
        for tool in tools {
            self.register_tool(tool);
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Get all registered tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Execute a single tool call
    pub async fn execute_tool(&self, call: &ToolCall) -> ToolResult {
        let Some(tool) = self.tools.get(&call.name) else {
            warn!(tool = %call.name, "tool not found");
            return ToolResult::error(
                &call.id,
                &call.name,
                format!("Tool '{}' not found", call.name),
            );
        };

        debug!(call = %tool.render_call(call), "executing tool call");
        tool.execute_with_timing(call).await
    }

    /// Execute multiple tool calls, one after another
    pub async fn execute_tools(&self, calls: &[ToolCall]) -> Vec<ToolResult> {
        let mut results = Vec::with_capacity(calls.len());

        for call in calls {
            results.push(self.execute_tool(call).await);
        }

        results
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}
