use crate::history::StepHistory;
use crate::{Algorithm, AnyAlgorithm, Graph, Outcome, Result, RunState, VertexId};

#[cfg(feature = "events")]
use crate::events::{Event, EventSink, PayloadCompleted, PayloadReset, PayloadStep};

/// A graph, an algorithm and the run between them.
///
/// Owns the current snapshot and the history of every snapshot before it.
/// This is the object a presentation layer drives: step forward, step back,
/// reset, or swap the graph and start over.
pub struct Session<A: Algorithm = AnyAlgorithm> {
    graph: Graph,
    algorithm: A,
    start: VertexId,
    goal: Option<VertexId>,
    state: RunState,
    history: StepHistory,

    #[cfg(feature = "events")]
    events_sink: Option<Box<dyn EventSink>>,
}

impl<A: Algorithm + std::fmt::Debug> std::fmt::Debug for Session<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("graph", &self.graph)
            .field("algorithm", &self.algorithm)
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("state", &self.state)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl<A: Algorithm> Session<A> {
    pub fn new(graph: Graph, algorithm: A, start: VertexId, goal: Option<VertexId>) -> Result<Self> {
        let state = algorithm.reset(&graph, start, goal)?;
        log::debug!(
            "{} session on {} vertices from {}",
            algorithm.kind().name(),
            graph.vertex_count(),
            graph.name(start)
        );

        Ok(Self {
            graph,
            algorithm,
            start,
            goal,
            state,
            history: StepHistory::new(),

            #[cfg(feature = "events")]
            events_sink: None,
        })
    }

    #[cfg(feature = "events")]
    /// Supply a sink that will receive session events.
    /// Works with `crossbeam::channel::Sender<Event>`, [`crate::events::CallbackSink`],
    /// or custom implementations.
    pub fn with_event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.events_sink = Some(sink);
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn goal(&self) -> Option<VertexId> {
        self.goal
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Number of steps that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_step_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn result(&self) -> Option<&Outcome> {
        self.state.result()
    }

    /// Advances by one micro-step. Does nothing once the run is complete.
    pub fn step_forward(&mut self) -> &RunState {
        if self.state.is_complete() {
            return &self.state;
        }

        let next = self.algorithm.step(&self.graph, &self.state);
        let prev = std::mem::replace(&mut self.state, next);
        self.history.push(prev);

        #[cfg(feature = "events")]
        self.publish_event(Event::Stepped(PayloadStep {
            step: self.state.step,
            tag: self.state.tag,
            message: self.state.message.clone(),
        }));

        if self.state.is_complete() {
            log::debug!(
                "{} finished after {} steps: {}",
                self.algorithm.kind().name(),
                self.state.step,
                self.state.message
            );

            #[cfg(feature = "events")]
            if let Some(outcome) = self.state.outcome.clone() {
                self.publish_event(Event::Completed(PayloadCompleted {
                    step: self.state.step,
                    outcome,
                }));
            }
        }

        &self.state
    }

    /// Restores the snapshot before the latest step.
    pub fn step_back(&mut self) -> Result<&RunState> {
        self.state = self.history.step_back()?;

        #[cfg(feature = "events")]
        self.publish_event(Event::SteppedBack(PayloadStep {
            step: self.state.step,
            tag: self.state.tag,
            message: self.state.message.clone(),
        }));

        Ok(&self.state)
    }

    /// Steps until the run completes.
    pub fn run_to_end(&mut self) -> &RunState {
        while !self.state.is_complete() {
            self.step_forward();
        }
        &self.state
    }

    /// Starts the run over with the same graph and endpoints.
    pub fn reset(&mut self) -> Result<()> {
        self.restart(self.start, self.goal)
    }

    /// Starts over from new endpoints. On error the session is unchanged.
    pub fn set_endpoints(&mut self, start: VertexId, goal: Option<VertexId>) -> Result<()> {
        self.restart(start, goal)
    }

    /// Starts over on a different graph. On error the old graph stays.
    pub fn replace_graph(&mut self, graph: Graph) -> Result<()> {
        let state = self.algorithm.reset(&graph, self.start, self.goal)?;
        self.graph = graph;
        self.install(state);
        Ok(())
    }

    /// Starts over with a different algorithm. On error the old one stays.
    pub fn replace_algorithm(&mut self, algorithm: A) -> Result<()> {
        let state = algorithm.reset(&self.graph, self.start, self.goal)?;
        self.algorithm = algorithm;
        self.install(state);
        Ok(())
    }

    fn restart(&mut self, start: VertexId, goal: Option<VertexId>) -> Result<()> {
        let state = self.algorithm.reset(&self.graph, start, goal)?;
        self.start = start;
        self.goal = goal;
        self.install(state);
        Ok(())
    }

    fn install(&mut self, state: RunState) {
        self.state = state;
        self.history.clear();
        log::debug!(
            "{} reset at {}",
            self.algorithm.kind().name(),
            self.graph.name(self.start)
        );

        #[cfg(feature = "events")]
        self.publish_event(Event::Reset(PayloadReset {
            algorithm: self.algorithm.kind(),
            start: self.start.index(),
            goal: self.goal.map(|g| g.index()),
        }));
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sink) = &self.events_sink {
            sink.send(event);
        }
    }
}
