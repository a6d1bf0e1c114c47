/*!
 * Session commands shared by the CLI
 *
 * Thin workflows over [`SessionClient`] that turn negative acknowledgments
 * into [`NetemuError::Rejected`], so the binary only deals with one error
 * path.
 */

use crate::error::{NetemuError, Result};
use crate::topology::Topology;
use netemu_connect::model::{SessionContext, SessionState};
use netemu_connect::{SessionClient, TopologyOrchestrator};
use netemu_interface::CoreApi;
use std::path::Path;
use tracing::info;

/// Context for an existing session, carrying its current state
pub async fn attach<A: CoreApi>(
    client: &SessionClient<A>,
    session_id: i32,
) -> Result<SessionContext> {
    let session = client.get_session(session_id).await?;
    Ok(SessionContext::new(session.id, session.state))
}

/// Build `topology` and instantiate it
///
/// With `session_id` the topology is added to that session, otherwise a new
/// session is created. Returns the context of the started session.
pub async fn start<A: CoreApi>(
    client: &SessionClient<A>,
    session_id: Option<i32>,
    topology: &Topology,
) -> Result<SessionContext> {
    let mut ctx = match session_id {
        Some(id) => attach(client, id).await?,
        None => client.create_session().await?,
    };

    let started = TopologyOrchestrator::new(client)
        .start(&mut ctx, &topology.nodes, &topology.links, &topology.hooks)
        .await?;
    if !started {
        return Err(NetemuError::Rejected(format!(
            "session {} stopped in state {}",
            ctx.id, ctx.state
        )));
    }

    info!("Session {} instantiated", ctx.id);
    Ok(ctx)
}

pub async fn stop<A: CoreApi>(
    client: &SessionClient<A>,
    session_id: i32,
) -> Result<SessionContext> {
    let mut ctx = attach(client, session_id).await?;
    if !TopologyOrchestrator::new(client).stop(&mut ctx).await? {
        return Err(NetemuError::Rejected(format!("shutdown of session {}", session_id)));
    }
    Ok(ctx)
}

pub async fn set_state<A: CoreApi>(
    client: &SessionClient<A>,
    session_id: i32,
    state: SessionState,
) -> Result<SessionContext> {
    let mut ctx = attach(client, session_id).await?;
    if !client.set_state(&mut ctx, state).await? {
        return Err(NetemuError::Rejected(format!(
            "state {} for session {}",
            state, session_id
        )));
    }
    Ok(ctx)
}

pub async fn delete<A: CoreApi>(client: &SessionClient<A>, session_id: i32) -> Result<()> {
    if !client.delete_session(session_id).await? {
        return Err(NetemuError::Rejected(format!("deletion of session {}", session_id)));
    }
    Ok(())
}

/// Write the session's XML document to `path`; returns the byte count
pub async fn save_xml<A: CoreApi>(
    client: &SessionClient<A>,
    session_id: i32,
    path: &Path,
) -> Result<usize> {
    let ctx = attach(client, session_id).await?;
    let data = client.save_xml(&ctx).await?;
    std::fs::write(path, &data)?;
    Ok(data.len())
}

/// Load an XML document into a new session and return its id
pub async fn open_xml<A: CoreApi>(client: &SessionClient<A>, path: &Path) -> Result<i32> {
    let data = std::fs::read(path)?;
    client
        .open_xml(data)
        .await?
        .ok_or_else(|| NetemuError::Rejected(format!("XML file {}", path.display())))
}
