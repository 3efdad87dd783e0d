use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::EnumIter;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[at("/settings")]
    Settings,
    #[at("/exercises")]
    Exercises,
    #[at("/routines")]
    Routines,
    #[at("/routines/add")]
    AddRoutine,
    #[at("/routines/:id")]
    RoutineDetail { id: String },
    #[at("/workouts")]
    Workouts,
    #[at("/start-workout")]
    StartWorkout,
    #[at("/log-workout")]
    LogWorkout,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// What a route renders for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Render,
    RedirectTo(MainRoute),
}

impl MainRoute {
    /// Translation key under `routes.`.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Exercises => "exercises",
            Self::Routines => "routines",
            Self::AddRoutine => "add_routine",
            Self::RoutineDetail { .. } => "routine_detail",
            Self::Workouts => "workouts",
            Self::StartWorkout => "start_workout",
            Self::LogWorkout => "log_workout",
            Self::NotFound => "not_found",
        }
    }

    pub const fn icon(&self) -> IconId {
        match self {
            Self::Home => IconId::HeroiconsOutlineHome,
            Self::Login => IconId::HeroiconsOutlineArrowRightOnRectangle,
            Self::Register => IconId::HeroiconsOutlineUserPlus,
            Self::Dashboard => IconId::HeroiconsOutlineChartBar,
            Self::Profile => IconId::HeroiconsOutlineUserCircle,
            Self::Settings => IconId::HeroiconsOutlineCog6Tooth,
            Self::Exercises => IconId::HeroiconsOutlineBookOpen,
            Self::Routines | Self::AddRoutine | Self::RoutineDetail { .. } => {
                IconId::HeroiconsOutlineClipboardDocumentList
            }
            Self::Workouts => IconId::HeroiconsOutlineCalendarDays,
            Self::StartWorkout | Self::LogWorkout => IconId::HeroiconsOutlinePlayCircle,
            Self::NotFound => IconId::HeroiconsOutlineExclamationTriangle,
        }
    }

    /// Routes that only make sense with a session.
    pub const fn requires_session(&self) -> bool {
        !matches!(
            self,
            Self::Home | Self::Login | Self::Register | Self::Profile | Self::NotFound
        )
    }

    /// Decide whether to render this route or redirect away from it.
    pub fn access(&self, is_authenticated: bool) -> Access {
        match self {
            Self::Login | Self::Register if is_authenticated => {
                Access::RedirectTo(Self::Dashboard)
            }
            route if route.requires_session() && !is_authenticated => {
                Access::RedirectTo(Self::Login)
            }
            _ => Access::Render,
        }
    }
}

/// Header links for the session state, in display order.
pub fn nav_routes(is_authenticated: bool) -> Vec<MainRoute> {
    if is_authenticated {
        vec![
            MainRoute::Dashboard,
            MainRoute::Exercises,
            MainRoute::Routines,
            MainRoute::Workouts,
            MainRoute::StartWorkout,
            MainRoute::Profile,
            MainRoute::Settings,
        ]
    } else {
        vec![MainRoute::Login, MainRoute::Register]
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = use_selector(|state: &AppState| state.is_authenticated());

    if let Access::RedirectTo(target) = props.route.access(*is_authenticated) {
        return html! { <Redirect<MainRoute> to={target} /> };
    }

    let page = match props.route.clone() {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Dashboard => html! { <DashboardPage /> },
        MainRoute::Profile => html! { <ProfilePage /> },
        MainRoute::Settings => html! { <SettingsPage /> },
        MainRoute::Exercises => html! { <ExercisesPage /> },
        MainRoute::Routines => html! { <RoutinesPage /> },
        MainRoute::AddRoutine => html! { <AddRoutinePage /> },
        MainRoute::RoutineDetail { id } => html! { <RoutineDetailPage {id} /> },
        MainRoute::Workouts => html! { <WorkoutsPage /> },
        MainRoute::StartWorkout => html! { <StartWorkoutPage /> },
        MainRoute::LogWorkout => html! { <LogWorkoutPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <Layout current_route={props.route.clone()}>
            {page}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("Switching to route: {route:?}");
    html! { <MainRouteView {route} /> }
}
