use crate::utils::*;
use gloo::timers::callback::{Interval, Timeout};
use lightsout_core as game;
use yew::html::Scope;
use yew::prelude::*;

/// Snapshot of the session the view draws from.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BoardModel {
    grid: game::LightGrid,
    state: game::SessionState,
    moves: u32,
    seconds_remaining: u32,
    revealed: bool,
}

impl game::Renderer for BoardModel {
    fn render(&mut self, session: &game::Session) {
        self.grid.clone_from(session.grid());
        self.state = session.state();
        self.moves = session.moves();
        self.seconds_remaining = session.seconds_remaining();
        if !self.state.is_finished() {
            self.revealed = false;
        }
    }

    fn reveal_solved(&mut self) {
        self.revealed = true;
    }

    fn timed_out(&mut self) {
        gloo::dialogs::alert("Time's up, game over.");
    }
}

/// Keeps a gloo timer alive, dropping it cancels the timer.
#[allow(dead_code)]
pub(crate) enum TimerTask {
    Countdown(Interval),
    Reveal(Timeout),
}

pub(crate) struct GlooScheduler {
    link: Scope<GameView>,
}

impl game::Scheduler for GlooScheduler {
    type Task = TimerTask;

    fn start_countdown(&mut self) -> TimerTask {
        let link = self.link.clone();
        TimerTask::Countdown(Interval::new(1_000, move || link.send_message(Msg::Tick)))
    }

    fn schedule_reveal(&mut self, delay_ms: u32) -> TimerTask {
        let link = self.link.clone();
        TimerTask::Reveal(Timeout::new(delay_ms, move || {
            link.send_message(Msg::Reveal)
        }))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Toggle(game::Coord2),
    Start,
    Shuffle,
    Tick,
    Reveal,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    row: game::Coord,
    col: game::Coord,
    on: bool,
    image: AttrValue,
    callback: Callback<game::Coord2>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        row,
        col,
        on,
        image,
        callback,
    } = props.clone();

    let class = classes!("tile", if on { "on" } else { "off" });
    let style = tile_style((row, col), on, &image);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", row, col);
        callback.emit((row, col));
    });

    html! {
        <div {class} {style} {onclick}/>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::SessionConfig,
    pub image: AttrValue,
    pub reveal_image: AttrValue,
}

pub(crate) struct GameView {
    controller: game::Controller<GlooScheduler, BoardModel>,
}

impl GameView {
    fn board(&self) -> &BoardModel {
        self.controller.renderer()
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let board = self.board();

        if board.revealed {
            let style = reveal_style(&ctx.props().reveal_image);
            return html! {
                <div id="board" class={classes!("board", "solved", "full-image")} {style}/>
            };
        }

        let playable = board.state.is_active();
        let image = ctx.props().image.clone();
        html! {
            <div id="board" class={classes!("board", playable.then_some("playable"))} style={board_style()}>
                {
                    for board.grid.iter_cells().map(|((row, col), on)| {
                        let callback = ctx.link().callback(Msg::Toggle);
                        html! {
                            <TileView {row} {col} {on} image={image.clone()} {callback}/>
                        }
                    })
                }
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = GlooScheduler {
            link: ctx.link().clone(),
        };
        Self {
            controller: game::Controller::new(
                ctx.props().config.clone(),
                scheduler,
                BoardModel::default(),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Toggle(pos) => {
                log::debug!("toggle: {:?}", pos);
                self.controller.toggle(pos).has_update()
            }
            Start => {
                log::debug!("start");
                self.controller.start().has_update()
            }
            Shuffle => {
                log::debug!("shuffle");
                self.controller.restart().has_update()
            }
            Tick => self.controller.tick().has_update(),
            Reveal => self.controller.reveal(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = self.board();
        let moves = board.moves.to_string();
        let clock = format_clock(board.seconds_remaining);
        let status = status_label(board.state);
        let won = matches!(board.state, game::SessionState::Won);

        let cb_start = ctx.link().callback(|_: MouseEvent| Start);
        let cb_shuffle = ctx.link().callback(|_: MouseEvent| Shuffle);

        html! {
            <div class="lightsout">
                <nav>
                    <aside id="moves">{moves}</aside>
                    <span id="status">{status}</span>
                    <aside id="timer">{clock}</aside>
                </nav>
                { self.view_board(ctx) }
                <footer>
                    <button id="startGame" onclick={cb_start}>{"Start"}</button>
                    <button id="shuffle" onclick={cb_shuffle} disabled={!board.state.is_active()}>{"Shuffle"}</button>
                </footer>
                if won {
                    <div id="winOverlay">
                        <p id="successMessage">{"Well done, the picture is yours!"}</p>
                    </div>
                }
            </div>
        }
    }
}
