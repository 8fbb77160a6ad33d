// Career roadmap engine
// Implements: salary curve, career path staging, skill timeline projection,
// personalisation, skill acquisition ranking and recommendations. All pure and synchronous;
// only the catalog and handlers touch async.

pub mod acquisition;
pub mod career_path;
pub mod catalog;
pub mod handlers;
pub mod horizon;
pub mod personalizer;
pub mod recommendations;
pub mod salary_curve;
pub mod skill_timeline;
