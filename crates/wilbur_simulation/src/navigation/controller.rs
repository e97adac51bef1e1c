//! Walker — path-following контроллер актора
//!
//! Состояния:
//! - Idle: нет poll task
//! - Approaching: poll task есть, первый waypoint ещё не взят
//! - Traveling: идём к current_waypoint
//! - Idle(blocked): edge guard отклонил запрос, состояние не меняется
//!
//! Poll task — repeating Timer (50 ms) внутри Walker. Новый путь заменяет
//! таймер целиком, поэтому двух активных poll task быть не может.
//!
//! С host контроллер общается только через MovementHost (velocity, facing,
//! анимация, звук, depth/scale), сам ничего не рисует.

use std::time::Duration;

use bevy::prelude::*;

use super::config::NavigationConfig;
use super::depth;
use super::edge_guard::{self, DirectionalBoundaries};
use super::events::FootstepCue;
use super::mesh::NavMeshProvider;
use super::path::NavPath;
use crate::components::{
    ActorAnimation, DrawDepth, Facing, MoveTarget, ScenePosition, Velocity, VisualScale,
};
use crate::logger::{log, log_warning};

/// Возможности host, которые нужны контроллеру
pub trait MovementHost {
    /// Kinematic move: постоянная скорость в сторону target, остановка на нём
    fn move_toward(&mut self, target: Vec2, speed: f32);
    /// Обнулить velocity
    fn halt(&mut self);
    fn face(&mut self, facing: Facing);
    fn play(&mut self, animation: ActorAnimation);
    fn footsteps(&mut self, cue: FootstepCue);
    fn set_depth(&mut self, depth: i32);
    fn set_scale(&mut self, scale: f32);
}

/// Команда presentation слою (для hosts, которые применяют команды отложенно)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresentationCommand {
    MoveToward { target: Vec2, speed: f32 },
    Halt,
    Face(Facing),
    Play(ActorAnimation),
    Footsteps(FootstepCue),
    Depth(i32),
    Scale(f32),
}

impl MovementHost for Vec<PresentationCommand> {
    fn move_toward(&mut self, target: Vec2, speed: f32) {
        self.push(PresentationCommand::MoveToward { target, speed });
    }

    fn halt(&mut self) {
        self.push(PresentationCommand::Halt);
    }

    fn face(&mut self, facing: Facing) {
        self.push(PresentationCommand::Face(facing));
    }

    fn play(&mut self, animation: ActorAnimation) {
        self.push(PresentationCommand::Play(animation));
    }

    fn footsteps(&mut self, cue: FootstepCue) {
        self.push(PresentationCommand::Footsteps(cue));
    }

    fn set_depth(&mut self, depth: i32) {
        self.push(PresentationCommand::Depth(depth));
    }

    fn set_scale(&mut self, scale: f32) {
        self.push(PresentationCommand::Scale(scale));
    }
}

/// Всё, что контроллер читает из мира на один вызов
///
/// Передаётся по значению в каждый tick — никакого захваченного receiver'а.
#[derive(Clone, Copy)]
pub struct NavContext<'a> {
    /// Позиция актора на момент вызова
    pub position: Vec2,
    pub mesh: &'a dyn NavMeshProvider,
    pub boundaries: &'a DirectionalBoundaries,
    pub config: &'a NavigationConfig,
}

/// Классификация poll tick (ровно одна ветка за tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    /// Нет waypoint и нет (или пустой) path
    NothingToDo,
    /// Нет waypoint, path не пуст
    NeedFirstWaypoint,
    /// Waypoint достигнут (distance < tolerance)
    NeedNextWaypoint,
    /// Идём к waypoint, он ещё далеко
    EnRoute,
}

/// Состояние навигации актора
///
/// Инварианты:
/// - `is_moving()` ⇔ poll task зарегистрирован
/// - `current_waypoint == None` ⇔ актор не идёт к точке (idle или ждёт первый waypoint)
#[derive(Component, Debug, Default)]
#[require(ScenePosition, Velocity, MoveTarget, Facing, DrawDepth, VisualScale, ActorAnimation)]
pub struct Walker {
    pub(crate) current_waypoint: Option<Vec2>,
    pub(crate) path: Option<NavPath>,
    pub(crate) poll: Option<Timer>,
    /// Непрерывный rescale каждый кадр (пока идём)
    pub(crate) rescale: bool,
    /// Последняя позиция (старт или poll tick), где актор был внутри mesh
    pub(crate) last_inside: Option<Vec2>,
    /// Уже предупредили, что актор за горизонтом
    pub(crate) past_horizon: bool,
}

impl Walker {
    pub fn is_moving(&self) -> bool {
        self.poll.is_some()
    }

    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.current_waypoint
    }

    pub fn path(&self) -> Option<&NavPath> {
        self.path.as_ref()
    }

    pub fn is_rescaling(&self) -> bool {
        self.rescale
    }

    /// Начать путь (no-op, если edge guard против или путь пуст)
    ///
    /// Возвращает true, если путь принят. Предыдущий poll task
    /// снимается и заменяется новым в одной операции.
    pub fn request_move(
        &mut self,
        path: NavPath,
        ctx: NavContext,
        host: &mut impl MovementHost,
    ) -> bool {
        let Some(destination) = path.destination() else {
            log("Walk request with empty path ignored");
            return false;
        };

        if edge_guard::is_unsafe(destination, ctx.position, ctx.boundaries, &ctx.config.edge) {
            log(&format!(
                "🚧 Walk {:?} → {:?} rejected: too close to the walkable edge",
                ctx.position, destination
            ));
            return false;
        }

        self.path = Some(path);
        self.current_waypoint = None;
        self.last_inside = ctx.mesh.is_point_in_mesh(ctx.position).then_some(ctx.position);
        self.poll = Some(Timer::new(ctx.config.poll_interval(), TimerMode::Repeating));

        host.play(ActorAnimation::Walking);
        host.footsteps(FootstepCue::Start {
            volume: ctx.config.footstep_volume,
        });
        true
    }

    /// Классификация текущей ситуации для poll tick
    pub fn phase(&self, position: Vec2, tolerance: f32) -> TickPhase {
        match (self.current_waypoint, self.path.as_ref()) {
            (None, Some(path)) if !path.is_empty() => TickPhase::NeedFirstWaypoint,
            (None, _) => TickPhase::NothingToDo,
            (Some(waypoint), _) if waypoint.distance(position) < tolerance => TickPhase::NeedNextWaypoint,
            (Some(_), _) => TickPhase::EnRoute,
        }
    }

    /// Одно срабатывание poll task
    pub fn poll_tick(&mut self, ctx: NavContext, host: &mut impl MovementHost) -> TickPhase {
        let phase = self.phase(ctx.position, ctx.config.distance_tolerance);
        if phase == TickPhase::NothingToDo {
            return phase;
        }

        if ctx.mesh.is_point_in_mesh(ctx.position) {
            self.last_inside = Some(ctx.position);
        }

        host.set_depth(depth::depth_key(ctx.position.y));
        if self.rescale {
            self.apply_scale(ctx.position.y, host);
        }

        match phase {
            TickPhase::NeedFirstWaypoint => self.go_to_first_waypoint(ctx, host),
            TickPhase::NeedNextWaypoint => self.go_to_next_waypoint(ctx, host),
            TickPhase::EnRoute | TickPhase::NothingToDo => {}
        }
        phase
    }

    /// Продвинуть poll task на `delta`; true, если tick наступил
    ///
    /// Несколько tick'ов за один длинный кадр схлопываются в один:
    /// позиция между ними не меняется, physics шаг ещё не прошёл.
    pub fn advance(&mut self, delta: Duration, ctx: NavContext, host: &mut impl MovementHost) -> bool {
        let Some(poll) = self.poll.as_mut() else {
            return false;
        };
        poll.tick(delta);
        if !poll.just_finished() {
            return false;
        }

        self.poll_tick(ctx, host);
        true
    }

    /// Принудительная остановка — то же, что естественный конец пути
    ///
    /// Повторный вызов у idle walker ничего не меняет.
    pub fn stop_walking(&mut self, position: Vec2, host: &mut impl MovementHost) {
        if !self.is_moving() && self.current_waypoint.is_none() && self.path.is_none() {
            return;
        }

        self.poll = None;
        self.current_waypoint = None;
        self.path = None;
        self.rescale = false;
        self.last_inside = None;

        host.halt();
        host.play(ActorAnimation::Idle);
        host.footsteps(FootstepCue::Stop);
        self.snapshot(position, host);
    }

    /// Per-frame refresh масштаба (только пока включён rescale)
    pub fn refresh_scale(&mut self, position: Vec2, host: &mut impl MovementHost) {
        if self.rescale {
            self.apply_scale(position.y, host);
        }
    }

    /// Depth + scale снимок (спавн и остановка)
    pub fn snapshot(&mut self, position: Vec2, host: &mut impl MovementHost) {
        host.set_depth(depth::depth_key(position.y));
        self.apply_scale(position.y, host);
    }

    fn go_to_first_waypoint(&mut self, ctx: NavContext, host: &mut impl MovementHost) {
        let Some(waypoint) = self.path.as_mut().and_then(NavPath::next_waypoint) else {
            return;
        };

        self.current_waypoint = Some(waypoint);
        host.face(Facing::toward(ctx.position, waypoint));
        host.move_toward(waypoint, ctx.config.walk_speed);
        self.rescale = true;
    }

    fn go_to_next_waypoint(&mut self, ctx: NavContext, host: &mut impl MovementHost) {
        let previous = self.current_waypoint;
        // Path мог быть снят снаружи — считаем его пустым
        let next = self.path.as_mut().and_then(NavPath::next_waypoint);
        self.current_waypoint = next;

        let Some(waypoint) = next else {
            // Вне mesh новый путь уже не построится: откатываемся к последней
            // надёжной точке, идём к ней и проверяем снова на следующем tick
            if !ctx.mesh.is_point_in_mesh(ctx.position) {
                let Some(previous) = previous else {
                    return;
                };
                let fallback = self.known_good(previous, ctx.mesh);
                self.current_waypoint = Some(fallback);
                host.face(Facing::toward(ctx.position, fallback));
                host.move_toward(fallback, ctx.config.walk_speed);
                log(&format!(
                    "Walker at {:?} is outside the navmesh, heading back to {:?}",
                    ctx.position, fallback
                ));
                return;
            }
            self.stop_walking(ctx.position, host);
            return;
        };

        host.move_toward(waypoint, ctx.config.walk_speed);
        host.face(Facing::toward(ctx.position, waypoint));
    }

    /// Waypoint для отката: сам `previous`, если он в mesh, иначе последняя
    /// позиция актора внутри mesh (если такой не было — всё равно `previous`)
    fn known_good(&self, previous: Vec2, mesh: &dyn NavMeshProvider) -> Vec2 {
        if mesh.is_point_in_mesh(previous) {
            return previous;
        }
        self.last_inside.unwrap_or(previous)
    }

    fn apply_scale(&mut self, y: f32, host: &mut impl MovementHost) {
        match depth::scale(y) {
            Some(scale) => {
                self.past_horizon = false;
                host.set_scale(scale);
            }
            None if self.past_horizon => {}
            None => {
                self.past_horizon = true;
                log_warning(&format!("No visual scale for y = {} (at or past the horizon), keeping previous", y));
            }
        }
    }
}
