use crate::fields::{SocialLinksField, TagListField};
use chrono::NaiveDate;
use portfolio_sdk::{
    CollectionResource, Experience, ExperienceDraft, PersonalInformation, Project, ProjectDraft,
};
use thiserror::Error;

/// Wire format of the date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A form that cannot be committed as entered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a YYYY-MM-DD date, got {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Binds an edit form to its resource: empty defaults for create, an
/// existing item's values copied in for edit, and a commit producing the
/// wire draft.
pub trait ResourceForm<R: CollectionResource>: Send {
    fn empty() -> Self;
    fn prefilled(resource: &R) -> Self;
    /// Commit takes `&mut self` because tag fields normalize their edit
    /// buffer as part of committing.
    fn commit(&mut self) -> Result<R::Draft, FormError>;
}

fn check_required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn parse_optional_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, FormError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(field, value).map(Some)
    }
}

/// Edit form for a work experience. Dates are held as entered and only
/// parsed on commit; an empty end date means the position is ongoing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceForm {
    pub company_name: String,
    pub company_logo: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub detail: String,
    pub used_skills: TagListField,
}

impl ResourceForm<Experience> for ExperienceForm {
    fn empty() -> Self {
        Self::default()
    }

    fn prefilled(resource: &Experience) -> Self {
        Self {
            company_name: resource.company_name.clone(),
            company_logo: resource.company_logo.clone(),
            role: resource.role.clone(),
            start_date: resource.start_date.format(DATE_FORMAT).to_string(),
            end_date: resource
                .end_date
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            detail: resource.detail.clone(),
            used_skills: TagListField::from_values(resource.used_skills.iter().cloned()),
        }
    }

    fn commit(&mut self) -> Result<ExperienceDraft, FormError> {
        check_required("company name", &self.company_name)?;
        check_required("role", &self.role)?;
        check_required("start date", &self.start_date)?;
        let start_date = parse_date("start date", &self.start_date)?;
        let end_date = parse_optional_date("end date", &self.end_date)?;
        Ok(ExperienceDraft {
            company_name: self.company_name.clone(),
            company_logo: self.company_logo.clone(),
            role: self.role.clone(),
            start_date: Some(start_date),
            end_date,
            detail: self.detail.clone(),
            used_skills: self.used_skills.commit().to_vec(),
        })
    }
}

/// Edit form for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub detail: String,
    pub skills: TagListField,
    pub logo_url: String,
    pub url: String,
}

impl ResourceForm<Project> for ProjectForm {
    fn empty() -> Self {
        Self::default()
    }

    fn prefilled(resource: &Project) -> Self {
        Self {
            name: resource.name.clone(),
            detail: resource.detail.clone(),
            skills: TagListField::from_values(resource.skills.iter().cloned()),
            logo_url: resource.logo_url.clone(),
            url: resource.url.clone(),
        }
    }

    fn commit(&mut self) -> Result<ProjectDraft, FormError> {
        check_required("name", &self.name)?;
        check_required("detail", &self.detail)?;
        Ok(ProjectDraft {
            name: self.name.clone(),
            detail: self.detail.clone(),
            skills: self.skills.commit().to_vec(),
            logo_url: self.logo_url.clone(),
            url: self.url.clone(),
        })
    }
}

/// Edit form for the profile singleton. No field is required and there are
/// no dates, so committing cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub surname: String,
    pub job: String,
    pub summary: String,
    pub biography: String,
    pub personal_image_url: String,
    pub skills: TagListField,
    pub social_media_links: SocialLinksField,
}

impl ProfileForm {
    /// The create-mode form: blank fields, full platform vocabulary.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            surname: String::new(),
            job: String::new(),
            summary: String::new(),
            biography: String::new(),
            personal_image_url: String::new(),
            skills: TagListField::new(),
            social_media_links: SocialLinksField::empty(),
        }
    }

    #[must_use]
    pub fn prefilled(profile: &PersonalInformation) -> Self {
        Self {
            name: profile.name.clone(),
            surname: profile.surname.clone(),
            job: profile.job.clone(),
            summary: profile.summary.clone(),
            biography: profile.biography.clone(),
            personal_image_url: profile.personal_image_url.clone(),
            skills: TagListField::from_values(profile.skills.iter().cloned()),
            social_media_links: SocialLinksField::from_stored(&profile.social_media_links),
        }
    }

    pub fn commit(&mut self) -> PersonalInformation {
        PersonalInformation {
            name: self.name.clone(),
            surname: self.surname.clone(),
            job: self.job.clone(),
            summary: self.summary.clone(),
            biography: self.biography.clone(),
            skills: self.skills.commit().to_vec(),
            social_media_links: self.social_media_links.committed(),
            personal_image_url: self.personal_image_url.clone(),
        }
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::empty()
    }
}
