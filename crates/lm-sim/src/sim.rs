//! The `Sim` struct and its tick loop.

use lm_agent::{Agent, AgentPlan, AgentRngs};
use lm_behavior::{BehaviorModel, DecisionContext, MoveOutcome, apply_intent, inspect_perimeter};
use lm_core::{AgentId, SimConfig, Tick};
use lm_grid::{Grid, Occupant};
use tracing::info;

use crate::{Controls, SimObserver, SimResult};

// ── PassReport ────────────────────────────────────────────────────────────────

/// What one decision pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Agents that changed cell.
    pub moved:    usize,
    /// Agents that moved toward a cell that was taken by the time they moved.
    pub blocked:  usize,
    /// Agents that reached home after homing, in processing order.
    pub finished: Vec<AgentId>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<B>` holds all simulation state and drives the two-step tick:
///
/// 1. **Decide** ([`decide`](Self::decide)): every eligible agent, in
///    ascending `AgentId` order, decides and has its intent applied to the
///    grid at once.  Agent *i* sees every move made by agents *0..i*.
/// 2. **Settle** ([`settle`](Self::settle)): every agent that moved ends its
///    transit and inspects its perimeter, again in `AgentId` order.
///
/// A pass only starts when the controls are running and no active agent is
/// still in transit.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    pub config: SimConfig,

    /// Completed decision passes since construction or the last reset.
    pub tick: Tick,

    /// Authoritative occupancy.  Mutated only by applied intents.
    pub grid: Grid,

    /// All agents, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Agent definitions, kept so `reset` can restore target queues.
    pub plans: Vec<AgentPlan>,

    pub behavior: B,

    pub controls: Controls,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Queries ───────────────────────────────────────────────────────────

    /// Agents still taking part.
    pub fn active_count(&self) -> usize {
        self.agents.iter().filter(|a| a.active).count()
    }

    /// `true` if some active agent has not settled its last move.
    pub fn any_in_transit(&self) -> bool {
        self.agents.iter().any(|a| a.active && a.transit.in_transit)
    }

    /// A decision pass may start now.
    pub fn ready(&self) -> bool {
        self.controls.is_running() && !self.any_in_transit()
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run until every agent is inactive, `config.end_tick()` is reached, or
    /// the controls stop the clock.  Returns the final tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        while self.tick < self.config.end_tick() && self.active_count() > 0 {
            if !self.tick(observer)? {
                break;
            }
        }
        observer.on_sim_end(self.tick, &self.agents);
        Ok(self.tick)
    }

    /// Run at most `n` ticks (ignores `end_tick`).  Stops early if a tick is
    /// gated.  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if !self.tick(observer)? {
                break;
            }
        }
        Ok(())
    }

    /// One full tick: decide, then settle.  Returns `false` without doing
    /// anything if a pass may not start.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        if !self.ready() {
            return Ok(false);
        }
        let now = self.tick;
        observer.on_tick_start(now);

        let Some(report) = self.decide()? else {
            return Ok(false);
        };
        for &id in &report.finished {
            observer.on_agent_finished(now, &self.agents[id.index()]);
        }
        self.settle();

        observer.on_tick_end(now, report.moved, self.active_count());
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents, &self.grid);
        }
        Ok(true)
    }

    /// One decision pass over every eligible agent, in order.
    ///
    /// Advances `tick` if the pass ran.  Returns `None` when a pass may not
    /// start (see [`ready`](Self::ready)).
    pub fn decide(&mut self) -> SimResult<Option<PassReport>> {
        if !self.ready() {
            return Ok(None);
        }
        let now = self.tick;
        let mut report = PassReport::default();

        for agent in self.agents.iter_mut() {
            if !agent.can_decide() {
                continue;
            }
            let ctx = DecisionContext::new(now, &self.grid, self.config.trapped_move_limit);
            let rng = self.rngs.get_mut(agent.id);
            let intent = self.behavior.decide(agent, &ctx, rng)?;

            match apply_intent(agent, &mut self.grid, intent, now)? {
                MoveOutcome::Moved => report.moved += 1,
                MoveOutcome::Blocked => report.blocked += 1,
                MoveOutcome::Deactivated => report.finished.push(agent.id),
                MoveOutcome::Stayed => {}
            }
        }

        self.tick = now.next();
        Ok(Some(report))
    }

    /// Complete every transit in agent order, each followed by a perimeter
    /// inspection.  Returns the number of agents settled.
    ///
    /// Does nothing while the speed is zero: a paused or cancelled run keeps
    /// its agents frozen mid-move.
    pub fn settle(&mut self) -> usize {
        if !self.controls.is_moving() {
            return 0;
        }
        let mut settled = 0;
        for i in 0..self.agents.len() {
            if !self.agents[i].active || !lm_behavior::settle(&mut self.agents[i]) {
                continue;
            }
            settled += 1;
            let id = self.agents[i].id;
            inspect_perimeter(&mut self.agents, id, &self.grid);
        }
        settled
    }

    // ── Controls ──────────────────────────────────────────────────────────

    pub fn faster(&mut self) {
        self.controls.faster();
    }

    pub fn slower(&mut self) {
        self.controls.slower();
    }

    /// Pause or resume.  Stopwatches of agents in transit stop and restart
    /// with it.
    pub fn toggle_pause(&mut self) {
        let was_moving = self.controls.is_moving();
        self.controls.toggle_pause();
        self.sync_stopwatches(was_moving);
        info!(paused = self.controls.is_paused(), speed = self.controls.speed(), "pause toggled");
    }

    /// Hide every agent and freeze the run.  Only [`reset`](Self::reset)
    /// undoes this.
    pub fn cancel(&mut self) {
        let was_moving = self.controls.is_moving();
        for agent in &mut self.agents {
            agent.active = false;
        }
        self.controls.cancel();
        if was_moving {
            for agent in &mut self.agents {
                agent.statistics.stopwatch.stop();
            }
        }
        info!(tick = %self.tick, "simulation cancelled");
    }

    /// Put every agent back on its home with its original targets, reseed
    /// the RNGs, and restore the controls.  The tick counter restarts.
    pub fn reset(&mut self) -> SimResult<()> {
        for (agent, plan) in self.agents.iter_mut().zip(&self.plans) {
            if self.grid.occupant(agent.position) == Occupant::Agent(agent.id) {
                self.grid.clear(agent.position)?;
            }
            agent.reset(plan);
        }
        self.rngs.reseed(self.config.seed);
        self.controls.reset();
        self.tick = Tick::ZERO;
        info!(agents = self.agents.len(), "simulation reset");
        Ok(())
    }

    /// Start or stop in-transit stopwatches after a speed change.
    fn sync_stopwatches(&mut self, was_moving: bool) {
        let moving = self.controls.is_moving();
        if moving == was_moving {
            return;
        }
        for agent in self.agents.iter_mut().filter(|a| a.transit.in_transit) {
            if moving {
                agent.statistics.stopwatch.start();
            } else {
                agent.statistics.stopwatch.stop();
            }
        }
    }
}
