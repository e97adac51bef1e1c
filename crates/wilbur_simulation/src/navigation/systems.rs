//! Navigation systems — ECS обвязка вокруг Walker
//!
//! Порядок (Update, chain через WalkSet):
//! 1. Input: setup новых walkers, interactions → MoveRequest → WalkPath → start/stop
//! 2. Physics: velocity → ScenePosition (crate::physics)
//! 3. Navigation: poll task каждого walker
//! 4. Presentation: per-frame rescale

use bevy::ecs::query::QueryData;
use bevy::prelude::*;

use super::config::NavigationConfig;
use super::controller::{MovementHost, NavContext, Walker};
use super::edge_guard::DirectionalBoundaries;
use super::events::{
    FootstepCue, FootstepEvent, InteractRequest, MoveRequest, StopWalking, WalkFinished, WalkPath,
};
use super::mesh::SceneNavMesh;
use super::path::NavPath;
use crate::components::{
    ActorAnimation, DrawDepth, Facing, MoveTarget, ScenePosition, Velocity, VisualScale,
};
use crate::logger::{log, log_warning};
use crate::scene::SceneItem;

/// Компоненты актора, в которые пишет контроллер
#[derive(QueryData)]
#[query_data(mutable)]
pub struct WalkerBody {
    velocity: &'static mut Velocity,
    target: &'static mut MoveTarget,
    facing: &'static mut Facing,
    animation: &'static mut ActorAnimation,
    depth: &'static mut DrawDepth,
    scale: &'static mut VisualScale,
}

/// Всё, что walker systems трогают у актора
type WalkerData = (
    Entity,
    &'static mut Walker,
    &'static ScenePosition,
    WalkerBody,
);

/// MovementHost поверх компонентов актора
///
/// Команды контроллера сразу пишутся в presentation компоненты,
/// звук шагов уходит host'у через FootstepEvent.
pub struct EcsHost<'a, 'q, 'w> {
    entity: Entity,
    position: Vec2,
    body: &'a mut WalkerBodyItem<'q>,
    footsteps: &'a mut EventWriter<'w, FootstepEvent>,
}

impl<'a, 'q, 'w> EcsHost<'a, 'q, 'w> {
    pub fn new(
        entity: Entity,
        position: Vec2,
        body: &'a mut WalkerBodyItem<'q>,
        footsteps: &'a mut EventWriter<'w, FootstepEvent>,
    ) -> Self {
        Self {
            entity,
            position,
            body,
            footsteps,
        }
    }
}

impl MovementHost for EcsHost<'_, '_, '_> {
    fn move_toward(&mut self, target: Vec2, speed: f32) {
        *self.body.velocity = Velocity::toward(self.position, target, speed);
        self.body.target.0 = Some(target);
    }

    fn halt(&mut self) {
        *self.body.velocity = Velocity::default();
        self.body.target.0 = None;
    }

    fn face(&mut self, facing: Facing) {
        *self.body.facing = facing;
    }

    fn play(&mut self, animation: ActorAnimation) {
        *self.body.animation = animation;
    }

    fn footsteps(&mut self, cue: FootstepCue) {
        self.footsteps.write(FootstepEvent {
            entity: self.entity,
            cue,
        });
    }

    fn set_depth(&mut self, depth: i32) {
        self.body.depth.0 = depth;
    }

    fn set_scale(&mut self, scale: f32) {
        self.body.scale.0 = scale;
    }
}

/// System: one-time setup только что заспавненных walkers
///
/// Начальный depth/scale снимок + idle анимация.
pub fn setup_new_walkers(
    mut walkers: Query<WalkerData, Added<Walker>>,
    mut footsteps: EventWriter<FootstepEvent>,
) {
    for (entity, mut walker, position, mut body) in walkers.iter_mut() {
        let mut host = EcsHost::new(entity, position.0, &mut body, &mut footsteps);
        walker.snapshot(position.0, &mut host);
        host.play(ActorAnimation::Idle);
    }
}

/// System: InteractRequest → MoveRequest к walk spot предмета
pub fn route_interactions(
    mut requests: EventReader<InteractRequest>,
    items: Query<(&ScenePosition, &SceneItem)>,
    mut moves: EventWriter<MoveRequest>,
) {
    for request in requests.read() {
        let Ok((item_position, item)) = items.get(request.item) else {
            log_warning(&format!("InteractRequest: {:?} is not a scene item", request.item));
            continue;
        };

        moves.write(MoveRequest {
            entity: request.actor,
            destination: item.walk_spot(item_position.0),
        });
    }
}

/// System: MoveRequest → путь через SceneNavMesh → WalkPath
///
/// Недостижимая точка — не ошибка, клик просто игнорируется.
pub fn plan_walks(
    mut requests: EventReader<MoveRequest>,
    mesh: Res<SceneNavMesh>,
    positions: Query<&ScenePosition, With<Walker>>,
    mut walks: EventWriter<WalkPath>,
) {
    for request in requests.read() {
        let Ok(position) = positions.get(request.entity) else {
            log_warning(&format!("MoveRequest: {:?} is not a walker", request.entity));
            continue;
        };

        let Some(route) = mesh.provider().find_path(position.0, request.destination) else {
            log(&format!(
                "MoveRequest: no path {:?} → {:?}, ignored",
                position.0, request.destination
            ));
            continue;
        };

        walks.write(WalkPath {
            entity: request.entity,
            path: NavPath::from_route(route),
        });
    }
}

/// System: WalkPath → Walker::request_move (edge guard внутри)
pub fn start_walks(
    mut requests: EventReader<WalkPath>,
    mut walkers: Query<WalkerData>,
    mesh: Res<SceneNavMesh>,
    boundaries: Res<DirectionalBoundaries>,
    config: Res<NavigationConfig>,
    mut footsteps: EventWriter<FootstepEvent>,
) {
    for request in requests.read() {
        let Ok((entity, mut walker, position, mut body)) = walkers.get_mut(request.entity) else {
            log_warning(&format!("WalkPath: {:?} is not a walker", request.entity));
            continue;
        };

        let ctx = NavContext {
            position: position.0,
            mesh: mesh.provider(),
            boundaries: &boundaries,
            config: &config,
        };
        let mut host = EcsHost::new(entity, position.0, &mut body, &mut footsteps);

        if walker.request_move(request.path.clone(), ctx, &mut host) {
            log(&format!(
                "🚶 {:?}: walking {:?} → {:?} ({} waypoints)",
                entity,
                position.0,
                request.path.destination(),
                request.path.len()
            ));
        }
    }
}

/// System: StopWalking → Walker::stop_walking
pub fn stop_walks(
    mut requests: EventReader<StopWalking>,
    mut walkers: Query<WalkerData>,
    mut footsteps: EventWriter<FootstepEvent>,
    mut finished: EventWriter<WalkFinished>,
) {
    for request in requests.read() {
        let Ok((entity, mut walker, position, mut body)) = walkers.get_mut(request.entity) else {
            log_warning(&format!("StopWalking: {:?} is not a walker", request.entity));
            continue;
        };

        let was_moving = walker.is_moving();
        let mut host = EcsHost::new(entity, position.0, &mut body, &mut footsteps);
        walker.stop_walking(position.0, &mut host);

        if was_moving {
            finished.write(WalkFinished {
                entity,
                position: position.0,
            });
        }
    }
}

/// System: poll task всех идущих walkers
///
/// Timer внутри Walker тикает на delta кадра, не больше одного poll tick за кадр.
pub fn advance_walkers(
    time: Res<Time>,
    mut walkers: Query<WalkerData>,
    mesh: Res<SceneNavMesh>,
    boundaries: Res<DirectionalBoundaries>,
    config: Res<NavigationConfig>,
    mut footsteps: EventWriter<FootstepEvent>,
    mut finished: EventWriter<WalkFinished>,
) {
    let delta = time.delta();

    for (entity, mut walker, position, mut body) in walkers.iter_mut() {
        if !walker.is_moving() {
            continue;
        }

        let ctx = NavContext {
            position: position.0,
            mesh: mesh.provider(),
            boundaries: &boundaries,
            config: &config,
        };
        let mut host = EcsHost::new(entity, position.0, &mut body, &mut footsteps);
        walker.advance(delta, ctx, &mut host);

        if !walker.is_moving() {
            log(&format!("🏁 {:?}: walk finished at {:?}", entity, position.0));
            finished.write(WalkFinished {
                entity,
                position: position.0,
            });
        }
    }
}

/// System: per-frame rescale, пока walker в пути
pub fn rescale_walkers(mut walkers: Query<WalkerData>, mut footsteps: EventWriter<FootstepEvent>) {
    for (entity, mut walker, position, mut body) in walkers.iter_mut() {
        if !walker.is_rescaling() {
            continue;
        }

        let mut host = EcsHost::new(entity, position.0, &mut body, &mut footsteps);
        walker.refresh_scale(position.0, &mut host);
    }
}
