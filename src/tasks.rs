mod api_ext;
mod database_ext;
mod next_run;

pub use self::{
    api_ext::{TasksApiExt, TASK_NOT_FOUND_MESSAGE},
    next_run::next_run_after,
};
