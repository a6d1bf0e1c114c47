//! TopologyOrchestrator: the session start and stop protocol
//!
//! The daemon only accepts topology changes in CONFIGURATION, and entering
//! INSTANTIATION freezes the topology and starts emulation. `start` therefore
//! runs, strictly in order:
//!
//! 1. state DEFINITION
//! 2. state CONFIGURATION
//! 3. every hook, in the given order
//! 4. every node, in the given order; a WLAN node first has its WLAN
//!    configuration read and written back unchanged, which pins the
//!    parameters the daemon would otherwise fill in while creating the node
//! 5. every link, in the given order
//! 6. state INSTANTIATION
//!
//! The first step that fails ends the run. A negative acknowledgment yields
//! `Ok(false)`, a fault yields `Err`. Nothing already created is undone;
//! the caller either retries against the partial session or deletes it.

use crate::client::{Result, SessionClient};
use crate::model::{Hook, Link, Node, SessionContext, SessionState};
use netemu_interface::CoreApi;
use tracing::{debug, info, warn};

/// Drives a [`SessionClient`] through the start/stop protocol
pub struct TopologyOrchestrator<'a, A: CoreApi> {
    client: &'a SessionClient<A>,
}

impl<'a, A: CoreApi> TopologyOrchestrator<'a, A> {
    pub fn new(client: &'a SessionClient<A>) -> Self {
        Self { client }
    }

    /// Build the topology and hand the session to the daemon for instantiation
    ///
    /// Links must only reference nodes created earlier in the same call or
    /// already present in the session; this is not checked.
    pub async fn start(
        &self,
        ctx: &mut SessionContext,
        nodes: &[Node],
        links: &[Link],
        hooks: &[Hook],
    ) -> Result<bool> {
        info!(
            "Starting session {}: {} nodes, {} links, {} hooks",
            ctx.id,
            nodes.len(),
            links.len(),
            hooks.len()
        );

        for state in [SessionState::Definition, SessionState::Configuration] {
            if !self.client.set_state(ctx, state).await? {
                return Ok(false);
            }
        }

        for hook in hooks {
            if !self.client.create_hook(ctx, hook).await? {
                warn!("Session {}: hook {} rejected, aborting start", ctx.id, hook.file);
                return Ok(false);
            }
        }

        for node in nodes {
            if node.is_wlan() && !self.preconfigure_wlan(ctx, node).await? {
                return Ok(false);
            }
            let node_id = self.client.create_node(ctx, node).await?;
            debug!("Session {}: node {} in place", ctx.id, node_id);
        }

        for link in links {
            if !self.client.create_link(ctx, link).await? {
                warn!(
                    "Session {}: link {:?} - {:?} rejected, aborting start",
                    ctx.id, link.node_one, link.node_two
                );
                return Ok(false);
            }
        }

        self.client
            .set_state(ctx, SessionState::Instantiation)
            .await
    }

    /// Move the session to SHUTDOWN; the daemon tears down the topology
    pub async fn stop(&self, ctx: &mut SessionContext) -> Result<bool> {
        info!("Stopping session {}", ctx.id);
        self.client.set_state(ctx, SessionState::Shutdown).await
    }

    async fn preconfigure_wlan(&self, ctx: &SessionContext, node: &Node) -> Result<bool> {
        let config = self.client.get_node_wlan_config(ctx, node).await?;
        let accepted = self.client.set_node_wlan_config(ctx, node, &config).await?;
        if !accepted {
            warn!(
                "Session {}: WLAN configuration of node {:?} rejected, aborting start",
                ctx.id, node.id
            );
        }
        Ok(accepted)
    }
}
