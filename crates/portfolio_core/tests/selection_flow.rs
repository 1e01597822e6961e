use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::sync::Arc;

use portfolio_core::sample::{sample_catalog, sample_skill_groups};
use portfolio_core::{
    enrich_skills, GallerySelectionController, MemoryNavigator, Navigator, ProjectId,
    RadarChart, RadarClick, Route, Transition, HIGHLIGHT_PARAM, SKILLS_PATH,
};

#[test]
fn radar_click_deep_links_into_gallery_detail() -> Result<(), Box<dyn Error>> {
    let catalog = Arc::new(sample_catalog()?);
    let groups = sample_skill_groups()?;
    let skills = enrich_skills(&groups[0].skills, &catalog);
    let mut chart = RadarChart::new(groups[0].title.clone(), skills, None)?;
    let mut navigator = MemoryNavigator::new(SKILLS_PATH);

    // "React" is axis 3 and appears in projects 2 and 3.
    let outcome = chart.click(3, &mut navigator);
    assert_eq!(outcome, RadarClick::Navigated("/projects?highlight=2".to_string()));
    assert_eq!(navigator.current().route(), Some(Route::Gallery));

    let mut gallery = GallerySelectionController::mount(Arc::clone(&catalog), &mut navigator);
    assert_eq!(gallery.highlighted(), Some(&ProjectId::new("2")));
    assert_eq!(gallery.carousel().map(|c| c.len()), Some(2));

    if let Some(carousel) = gallery.carousel_mut() {
        carousel.next();
    }
    assert_eq!(gallery.select_next(&mut navigator), Transition::Switched);
    assert_eq!(gallery.carousel().and_then(|c| c.current()), Some(0));
    assert_eq!(navigator.query_param(HIGHLIGHT_PARAM).as_deref(), Some("3"));

    assert_eq!(gallery.close(&mut navigator), Transition::Closed);
    assert_eq!(navigator.query_param(HIGHLIGHT_PARAM), None);
    Ok(())
}

#[test]
fn radar_callback_drives_an_already_mounted_gallery() -> Result<(), Box<dyn Error>> {
    let catalog = Arc::new(sample_catalog()?);
    let groups = sample_skill_groups()?;
    let navigator = Rc::new(RefCell::new(MemoryNavigator::new("/projects")));
    let gallery = Rc::new(RefCell::new(GallerySelectionController::mount(
        Arc::clone(&catalog),
        &mut *navigator.borrow_mut(),
    )));

    let mut chart = RadarChart::new(
        groups[1].title.clone(),
        enrich_skills(&groups[1].skills, &catalog),
        None,
    )?
    .with_on_select({
        let gallery = Rc::clone(&gallery);
        let navigator = Rc::clone(&navigator);
        move |skill, ids| {
            gallery
                .borrow_mut()
                .select_skill(skill.name(), ids, &mut *navigator.borrow_mut());
        }
    });

    // Axis 0 is "C#", used only by project 1.
    let mut unused = MemoryNavigator::default();
    assert_eq!(chart.click(0, &mut unused), RadarClick::Selected { index: 0 });
    assert_eq!(unused.history().len(), 1);
    assert_eq!(gallery.borrow().highlighted(), Some(&ProjectId::new("1")));
    assert_eq!(
        navigator.borrow().current().to_string(),
        "/projects?highlight=1"
    );
    Ok(())
}
