//! WebSocket gateway.
//!
//! Dashboards connect here instead of talking to the chain directly. A
//! connection registers either as a trading client (gets a custodied wallet)
//! or as a spectator (read-only). The gateway then:
//!
//! - polls the bet list and every registered wallet's positions on the list
//!   interval, and each watched bet (plus the watcher's position) on the
//!   shorter watch interval;
//! - accepts mutation commands, validates them locally, submits, and on
//!   confirmed success refetches exactly the queries that mutation may have
//!   invalidated;
//! - pushes failures as transient `error` messages and never retries.
//!
//! Mutations are not queued or serialized across connections; the program
//! itself arbitrates concurrent submissions. Late results for a connection
//! that has gone away are simply dropped.

use std::{
    collections::{HashMap, HashSet},
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Result;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::Value;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::Transaction,
};
use tokio::{net::TcpListener, sync::mpsc, time::sleep};
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{info, warn};

use crate::client::ProgramClient;
use crate::config::Config;
use crate::error::BridgeError;
use crate::{feed, locator, wallet};
use crate::validate::CreateBetRequest;

// ---------- Inbound protocol ----------

#[derive(Deserialize)]
#[serde(tag = "action")]
enum InboundMsg {
    #[serde(rename = "register")]
    Register { client_id: String },
    #[serde(rename = "register_spectator")]
    RegisterSpectator { client_id: Option<String> },

    #[serde(rename = "create_bet")]
    CreateBet(CreateBetRequest),
    #[serde(rename = "place_bet")]
    PlaceBet { bet_id: String, option: u8, amount: u64 },
    #[serde(rename = "resolve_bet")]
    ResolveBet { bet_id: String, winning_option: u8, result_details: String },
    #[serde(rename = "claim_winnings")]
    ClaimWinnings { bet_id: String },
    #[serde(rename = "claim_maker_fees")]
    ClaimMakerFees { bet_id: String },
    #[serde(rename = "claim_platform_fees")]
    ClaimPlatformFees { bet_id: String },
    #[serde(rename = "cancel_bet")]
    CancelBet { bet_id: String },
    #[serde(rename = "initialize_platform")]
    InitializePlatform { platform_fee_bps: u16, maker_fee_bps: u16 },

    #[serde(rename = "watch_bet")]
    WatchBet { bet_id: String },
    #[serde(rename = "unwatch_bet")]
    UnwatchBet { bet_id: String },

    #[serde(other)]
    Other,
}

impl InboundMsg {
    /// Human label for failure notifications.
    fn label(&self) -> &'static str {
        match self {
            InboundMsg::CreateBet(_) => "create bet",
            InboundMsg::PlaceBet { .. } => "place bet",
            InboundMsg::ResolveBet { .. } => "resolve bet",
            InboundMsg::ClaimWinnings { .. } => "claim winnings",
            InboundMsg::ClaimMakerFees { .. } => "claim maker fees",
            InboundMsg::ClaimPlatformFees { .. } => "claim platform fees",
            InboundMsg::CancelBet { .. } => "cancel bet",
            InboundMsg::InitializePlatform { .. } => "initialize platform",
            _ => "handle message",
        }
    }
}

// ---------- Refresh contract ----------

/// The queries a dashboard is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Bet(String),
    BetList,
    Position(String),
    PositionList,
}

/// A confirmed state change, carrying whatever ids its refetches need.
#[derive(Debug, Clone)]
pub enum Mutation {
    InitializePlatform,
    CreateBet { bet_id: String },
    PlaceBet { bet_id: String },
    ResolveBet { bet_id: String },
    ClaimWinnings { bet_id: String },
    ClaimMakerFees { bet_id: String },
    ClaimPlatformFees { bet_id: String },
    CancelBet { bet_id: String },
}

impl Mutation {
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::InitializePlatform => "initialize_platform",
            Mutation::CreateBet { .. } => "create_bet",
            Mutation::PlaceBet { .. } => "place_bet",
            Mutation::ResolveBet { .. } => "resolve_bet",
            Mutation::ClaimWinnings { .. } => "claim_winnings",
            Mutation::ClaimMakerFees { .. } => "claim_maker_fees",
            Mutation::ClaimPlatformFees { .. } => "claim_platform_fees",
            Mutation::CancelBet { .. } => "cancel_bet",
        }
    }

    /// Queries whose displayed data this mutation may have invalidated.
    /// Refetched only after confirmed success; the UI never shows an
    /// optimistic state.
    pub fn invalidations(&self) -> Vec<Query> {
        match self {
            Mutation::InitializePlatform => vec![],
            Mutation::CreateBet { .. } | Mutation::CancelBet { .. } => vec![Query::BetList],
            Mutation::PlaceBet { bet_id } | Mutation::ClaimWinnings { bet_id } => vec![
                Query::Bet(bet_id.clone()),
                Query::Position(bet_id.clone()),
                Query::BetList,
                Query::PositionList,
            ],
            Mutation::ResolveBet { bet_id }
            | Mutation::ClaimMakerFees { bet_id }
            | Mutation::ClaimPlatformFees { bet_id } => {
                vec![Query::Bet(bet_id.clone()), Query::BetList]
            }
        }
    }
}

// ---------- Gateway ----------

struct ClientConn {
    tx: mpsc::UnboundedSender<Value>,
    wallet: Arc<Keypair>,
    watched: HashSet<String>,
}

pub struct Gateway {
    cfg: Config,
    client: Arc<ProgramClient>,
    payer: Arc<Keypair>,
    conns: Arc<Mutex<HashMap<String, ClientConn>>>,
    spectators: Arc<Mutex<HashMap<String, mpsc::UnboundedSender<Value>>>>,
}

impl Gateway {
    pub fn new(cfg: Config, client: Arc<ProgramClient>, payer: Arc<Keypair>) -> Self {
        Self {
            cfg,
            client,
            payer,
            conns: Arc::new(Mutex::new(HashMap::new())),
            spectators: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn run(self: Arc<Self>) -> Result<()> {
        let listener = TcpListener::bind(self.cfg.listen_addr).await?;
        info!(addr = %self.cfg.listen_addr, "gateway listening");

        let me = self.clone();
        tokio::spawn(async move { me.list_tick().await });
        let me = self.clone();
        tokio::spawn(async move { me.watch_tick().await });

        loop {
            let (stream, addr) = listener.accept().await?;
            let me = self.clone();
            tokio::spawn(async move {
                if let Err(e) = me.handle_conn(stream, addr).await {
                    warn!(%addr, error = ?e, "connection error");
                }
            });
        }
    }

    async fn handle_conn(
        self: Arc<Self>,
        stream: tokio::net::TcpStream,
        addr: SocketAddr,
    ) -> Result<()> {
        let ws = accept_async(stream).await?;
        info!(%addr, "new connection");

        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<Value>();
        let (mut ws_tx, mut ws_rx) = ws.split();

        let write_task = tokio::spawn(async move {
            while let Some(msg) = out_rx.recv().await {
                let text = msg.to_string();
                if ws_tx.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
            let _ = ws_tx
                .send(Message::Close(Some(CloseFrame {
                    code: CloseCode::Normal,
                    reason: "bye".into(),
                })))
                .await;
        });

        let mut conn_id: Option<String> = None;
        let mut is_spectator = false;
        let mut signer: Option<Arc<Keypair>> = None;

        while let Some(Ok(msg)) = ws_rx.next().await {
            if !msg.is_text() {
                continue;
            }
            let text = msg.into_text()?;

            let cmd = match serde_json::from_str::<InboundMsg>(&text) {
                Ok(cmd) => cmd,
                Err(e) => {
                    let _ = out_tx.send(feed::error(format!("invalid message: {e}")));
                    continue;
                }
            };

            // Registration first.
            if conn_id.is_none() {
                match cmd {
                    InboundMsg::Register { client_id } => {
                        let kp = match self.provision_wallet(&client_id).await {
                            Ok(kp) => Arc::new(kp),
                            Err(e) => {
                                let _ = out_tx
                                    .send(feed::error(format!("Failed to register: {e}")));
                                continue;
                            }
                        };

                        self.conns.lock().unwrap().insert(
                            client_id.clone(),
                            ClientConn {
                                tx: out_tx.clone(),
                                wallet: kp.clone(),
                                watched: HashSet::new(),
                            },
                        );

                        let _ = out_tx.send(feed::registered(&client_id, &kp.pubkey()));
                        self.push_initial_snapshots(&client_id, Some(&kp.pubkey())).await;

                        info!(client_id = %client_id, wallet = %kp.pubkey(), "registered client");
                        signer = Some(kp);
                        conn_id = Some(client_id);
                    }
                    InboundMsg::RegisterSpectator { client_id } => {
                        let sid = client_id
                            .unwrap_or_else(|| format!("spectator_{}", unix_millis()));
                        self.spectators
                            .lock()
                            .unwrap()
                            .insert(sid.clone(), out_tx.clone());

                        let _ = out_tx.send(feed::spectator_registered(&sid));
                        self.push_initial_snapshots(&sid, None).await;

                        info!(spectator_id = %sid, "registered spectator");
                        is_spectator = true;
                        conn_id = Some(sid);
                    }
                    _ => {
                        let _ = out_tx.send(feed::error("you must register first".to_string()));
                    }
                }
                continue;
            }

            let client_id = conn_id.clone().unwrap_or_default();

            // Spectators are read-only.
            if is_spectator {
                continue;
            }

            match cmd {
                InboundMsg::WatchBet { bet_id } => {
                    if let Some(conn) = self.conns.lock().unwrap().get_mut(&client_id) {
                        conn.watched.insert(bet_id.clone());
                    }
                    // The scoped queries fire immediately, then on every
                    // watch tick.
                    self.push_watched(&client_id, &bet_id).await;
                }
                InboundMsg::UnwatchBet { bet_id } => {
                    if let Some(conn) = self.conns.lock().unwrap().get_mut(&client_id) {
                        conn.watched.remove(&bet_id);
                    }
                }
                InboundMsg::Register { .. } | InboundMsg::RegisterSpectator { .. } => {
                    let _ = out_tx.send(feed::error("already registered".to_string()));
                }
                InboundMsg::Other => {
                    let _ = out_tx.send(feed::error("unknown message".to_string()));
                }
                mutation_cmd => {
                    let label = mutation_cmd.label();
                    let kp = match signer.as_ref() {
                        Some(kp) => kp.clone(),
                        None => continue,
                    };
                    match self.submit(&kp, mutation_cmd).await {
                        Ok((mutation, signature)) => {
                            let _ = out_tx
                                .send(feed::tx(mutation.kind(), &signature.to_string()));
                            if let Mutation::CreateBet { bet_id } = &mutation {
                                self.broadcast(feed::bet_created(
                                    bet_id,
                                    &signature.to_string(),
                                ));
                            }
                            self.refresh(&mutation, &client_id).await;
                        }
                        Err(e) => {
                            let _ = out_tx.send(feed::error(format!("Failed to {label}: {e}")));
                        }
                    }
                }
            }
        }

        write_task.abort();
        if let Some(id) = conn_id {
            if is_spectator {
                self.spectators.lock().unwrap().remove(&id);
                info!(spectator_id = %id, "spectator disconnected");
            } else {
                self.conns.lock().unwrap().remove(&id);
                info!(client_id = %id, "client disconnected");
            }
        }
        Ok(())
    }

    // ---------- Mutations ----------

    async fn submit(
        &self,
        signer: &Keypair,
        cmd: InboundMsg,
    ) -> std::result::Result<(Mutation, Signature), BridgeError> {
        match cmd {
            InboundMsg::CreateBet(req) => {
                let (bet_id, sig) = self.client.create_bet(signer, &req).await?;
                Ok((Mutation::CreateBet { bet_id }, sig))
            }
            InboundMsg::PlaceBet { bet_id, option, amount } => {
                let sig = self.client.place_bet(signer, &bet_id, option, amount).await?;
                Ok((Mutation::PlaceBet { bet_id }, sig))
            }
            InboundMsg::ResolveBet { bet_id, winning_option, result_details } => {
                let sig = self
                    .client
                    .resolve_bet(signer, &bet_id, winning_option, &result_details)
                    .await?;
                Ok((Mutation::ResolveBet { bet_id }, sig))
            }
            InboundMsg::ClaimWinnings { bet_id } => {
                let sig = self.client.claim_winnings(signer, &bet_id).await?;
                Ok((Mutation::ClaimWinnings { bet_id }, sig))
            }
            InboundMsg::ClaimMakerFees { bet_id } => {
                let sig = self.client.claim_maker_fees(signer, &bet_id).await?;
                Ok((Mutation::ClaimMakerFees { bet_id }, sig))
            }
            InboundMsg::ClaimPlatformFees { bet_id } => {
                let sig = self.client.claim_platform_fees(signer, &bet_id).await?;
                Ok((Mutation::ClaimPlatformFees { bet_id }, sig))
            }
            InboundMsg::CancelBet { bet_id } => {
                let sig = self.client.cancel_bet(signer, &bet_id).await?;
                Ok((Mutation::CancelBet { bet_id }, sig))
            }
            InboundMsg::InitializePlatform { platform_fee_bps, maker_fee_bps } => {
                let sig = self
                    .client
                    .initialize_platform(signer, platform_fee_bps, maker_fee_bps)
                    .await?;
                Ok((Mutation::InitializePlatform, sig))
            }
            _ => Err(BridgeError::BlankField("action")),
        }
    }

    /// Refetch and push every query the mutation invalidated.
    async fn refresh(&self, mutation: &Mutation, client_id: &str) {
        let now = unix_now();
        for query in mutation.invalidations() {
            if let Err(e) = self.refetch(query, client_id, now).await {
                warn!(client_id = %client_id, error = %e, "refetch after mutation failed");
            }
        }
    }

    async fn refetch(
        &self,
        query: Query,
        client_id: &str,
        now: i64,
    ) -> std::result::Result<(), BridgeError> {
        match query {
            Query::Bet(bet_id) => {
                // A cancelled bet just disappears; the next list push drops it.
                if let Some(bet) = self.client.bet(&bet_id).await? {
                    let (address, _) =
                        locator::market_address(self.client.program_id(), &bet_id);
                    self.broadcast(feed::bet_update(&address, &bet, now));
                }
            }
            Query::BetList => {
                let bets = self.client.all_bets().await?;
                self.broadcast(feed::bet_list(&bets, now));
            }
            Query::Position(bet_id) => {
                let Some(wallet) = self.wallet_of(client_id) else {
                    return Ok(()); // connection gone, drop the late result
                };
                let bet = self.client.bet(&bet_id).await?;
                let position = self.client.position(&bet_id, &wallet).await?;
                let (address, _) =
                    locator::position_address(self.client.program_id(), &bet_id, &wallet);
                let msg = feed::position_update(
                    &bet_id,
                    position.as_ref().map(|p| (&address, p)),
                    bet.as_ref(),
                );
                self.send_scoped(client_id, msg);
            }
            Query::PositionList => {
                let Some(wallet) = self.wallet_of(client_id) else {
                    return Ok(());
                };
                let positions = self.client.positions_for(&wallet).await?;
                self.send_scoped(client_id, feed::position_list(&wallet, &positions));
            }
        }
        Ok(())
    }

    // ---------- Scheduled refresh ----------

    async fn list_tick(self: Arc<Self>) {
        loop {
            if let Err(e) = self.push_lists().await {
                warn!(error = %e, "list refresh failed");
            }
            sleep(self.cfg.list_refresh).await;
        }
    }

    async fn push_lists(&self) -> std::result::Result<(), BridgeError> {
        let now = unix_now();
        let bets = self.client.all_bets().await?;
        self.broadcast(feed::bet_list(&bets, now));

        let holders: Vec<(String, Pubkey)> = {
            let conns = self.conns.lock().unwrap();
            conns
                .iter()
                .map(|(id, conn)| (id.clone(), conn.wallet.pubkey()))
                .collect()
        };
        for (client_id, wallet) in holders {
            match self.client.positions_for(&wallet).await {
                Ok(positions) => {
                    self.send_scoped(&client_id, feed::position_list(&wallet, &positions));
                }
                Err(e) => warn!(client_id = %client_id, error = %e, "position list refresh failed"),
            }
        }
        Ok(())
    }

    async fn watch_tick(self: Arc<Self>) {
        loop {
            self.push_all_watched().await;
            sleep(self.cfg.watch_refresh).await;
        }
    }

    async fn push_all_watched(&self) {
        let watchers: Vec<(String, String)> = {
            let conns = self.conns.lock().unwrap();
            conns
                .iter()
                .flat_map(|(id, conn)| {
                    conn.watched.iter().map(|bet_id| (id.clone(), bet_id.clone()))
                })
                .collect()
        };
        for (client_id, bet_id) in watchers {
            self.push_watched(&client_id, &bet_id).await;
        }
    }

    /// One scoped refresh: the watched bet plus the watcher's position on it.
    async fn push_watched(&self, client_id: &str, bet_id: &str) {
        let now = unix_now();
        let bet = match self.client.bet(bet_id).await {
            Ok(bet) => bet,
            Err(e) => {
                warn!(client_id = %client_id, bet_id = %bet_id, error = %e, "watched bet refresh failed");
                return;
            }
        };
        if let Some(ref state) = bet {
            let (address, _) = locator::market_address(self.client.program_id(), bet_id);
            self.send_to(client_id, feed::bet_update(&address, state, now));
        }

        let Some(wallet) = self.wallet_of(client_id) else {
            return;
        };
        match self.client.position(bet_id, &wallet).await {
            Ok(position) => {
                let (address, _) =
                    locator::position_address(self.client.program_id(), bet_id, &wallet);
                let msg = feed::position_update(
                    bet_id,
                    position.as_ref().map(|p| (&address, p)),
                    bet.as_ref(),
                );
                self.send_to(client_id, msg);
            }
            Err(e) => warn!(client_id = %client_id, bet_id = %bet_id, error = %e, "watched position refresh failed"),
        }
    }

    async fn push_initial_snapshots(&self, conn_id: &str, wallet: Option<&Pubkey>) {
        let now = unix_now();
        match self.client.all_bets().await {
            Ok(bets) => self.send_to_any(conn_id, feed::bet_list(&bets, now)),
            Err(e) => warn!(conn_id = %conn_id, error = %e, "initial bet list failed"),
        }
        if let Some(wallet) = wallet {
            match self.client.positions_for(wallet).await {
                Ok(positions) => {
                    self.send_to_any(conn_id, feed::position_list(wallet, &positions));
                }
                Err(e) => warn!(conn_id = %conn_id, error = %e, "initial position list failed"),
            }
        }
    }

    // ---------- Wallet provisioning ----------

    async fn provision_wallet(&self, client_id: &str) -> Result<Keypair> {
        let kp = wallet::load_or_create(&self.cfg.wallet_dir, client_id)?;
        self.ensure_funded(&kp).await?;
        Ok(kp)
    }

    /// Top a custodied wallet up from the payer so it can cover fees and
    /// small stakes.
    async fn ensure_funded(&self, kp: &Keypair) -> std::result::Result<(), BridgeError> {
        let min = self.cfg.funding_lamports;
        if min == 0 {
            return Ok(());
        }
        let balance = self.client.rpc().get_balance(&kp.pubkey()).await?;
        if balance >= min {
            return Ok(());
        }

        let ix = system_instruction::transfer(&self.payer.pubkey(), &kp.pubkey(), min);
        let recent = self.client.rpc().get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&self.payer.pubkey()),
            &[self.payer.as_ref()],
            recent,
        );
        self.client.rpc().send_and_confirm_transaction(&tx).await?;
        Ok(())
    }

    // ---------- Delivery ----------

    fn wallet_of(&self, client_id: &str) -> Option<Pubkey> {
        self.conns
            .lock()
            .unwrap()
            .get(client_id)
            .map(|conn| conn.wallet.pubkey())
    }

    fn send_to(&self, client_id: &str, payload: Value) {
        if let Some(conn) = self.conns.lock().unwrap().get(client_id) {
            let _ = conn.tx.send(payload);
        }
    }

    /// Deliver to a client or spectator by connection id.
    fn send_to_any(&self, conn_id: &str, payload: Value) {
        if let Some(conn) = self.conns.lock().unwrap().get(conn_id) {
            let _ = conn.tx.send(payload);
            return;
        }
        if let Some(tx) = self.spectators.lock().unwrap().get(conn_id) {
            let _ = tx.send(payload);
        }
    }

    /// Owner gets the message as-is; spectators get a copy tagged with the
    /// owning client id for their scoreboards.
    fn send_scoped(&self, client_id: &str, mut payload: Value) {
        self.send_to(client_id, payload.clone());
        payload["client_id"] = Value::from(client_id);
        let specs = self.spectators.lock().unwrap();
        for tx in specs.values() {
            let _ = tx.send(payload.clone());
        }
    }

    fn broadcast(&self, payload: Value) {
        {
            let conns = self.conns.lock().unwrap();
            for conn in conns.values() {
                let _ = conn.tx.send(payload.clone());
            }
        }
        let specs = self.spectators.lock().unwrap();
        for tx in specs.values() {
            let _ = tx.send(payload.clone());
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_bet_invalidates_market_lists_and_position() {
        let mutation = Mutation::PlaceBet { bet_id: "abc".to_string() };
        let queries = mutation.invalidations();
        assert!(queries.contains(&Query::Bet("abc".to_string())));
        assert!(queries.contains(&Query::Position("abc".to_string())));
        assert!(queries.contains(&Query::BetList));
        assert!(queries.contains(&Query::PositionList));
    }

    #[test]
    fn claim_winnings_refreshes_the_same_set_as_place() {
        let place = Mutation::PlaceBet { bet_id: "x".into() }.invalidations();
        let claim = Mutation::ClaimWinnings { bet_id: "x".into() }.invalidations();
        assert_eq!(place, claim);
    }

    #[test]
    fn resolve_and_fee_claims_skip_position_queries() {
        for mutation in [
            Mutation::ResolveBet { bet_id: "x".into() },
            Mutation::ClaimMakerFees { bet_id: "x".into() },
            Mutation::ClaimPlatformFees { bet_id: "x".into() },
        ] {
            let queries = mutation.invalidations();
            assert_eq!(
                queries,
                vec![Query::Bet("x".to_string()), Query::BetList]
            );
        }
    }

    #[test]
    fn create_and_cancel_touch_only_the_list() {
        assert_eq!(
            Mutation::CreateBet { bet_id: "x".into() }.invalidations(),
            vec![Query::BetList]
        );
        assert_eq!(
            Mutation::CancelBet { bet_id: "x".into() }.invalidations(),
            vec![Query::BetList]
        );
    }

    #[test]
    fn inbound_commands_parse_from_tagged_json() {
        let msg: InboundMsg = serde_json::from_str(
            r#"{"action":"place_bet","bet_id":"abc","option":2,"amount":5000000}"#,
        )
        .unwrap();
        assert!(matches!(
            msg,
            InboundMsg::PlaceBet { ref bet_id, option: 2, amount: 5_000_000 } if bet_id == "abc"
        ));

        let msg: InboundMsg = serde_json::from_str(
            r#"{"action":"create_bet","description":"d","option_a":"A","option_b":"B",
                "end_time":1800000000,"category":"misc"}"#,
        )
        .unwrap();
        match msg {
            InboundMsg::CreateBet(req) => {
                // Stake bounds fall back to the defaults when omitted.
                assert_eq!(req.min_bet_amount, crate::validate::DEFAULT_MIN_BET);
                assert_eq!(req.max_bet_amount, crate::validate::DEFAULT_MAX_BET);
            }
            _ => panic!("expected create_bet"),
        }

        let msg: InboundMsg =
            serde_json::from_str(r#"{"action":"do_the_thing"}"#).unwrap();
        assert!(matches!(msg, InboundMsg::Other));
    }
}
