//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod files;
mod modules;
mod quarters;
mod quizzes;
mod roster;
mod sections;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    files::entities::File,
    modules::{
        entities::Module,
        requests::{CreateModuleRequest, ModuleListQuery, UpdateModuleRequest},
    },
    quarters::{
        entities::Quarter,
        requests::{CreateQuarterRequest, QuarterListQuery, UpdateQuarterRequest},
    },
    quizzes::{
        entities::Quiz,
        requests::{CreateQuizRequest, QuizListQuery, UpdateQuizRequest},
    },
    roster::{
        entities::Student,
        requests::{CreateStudentRequest, RosterQuery, UpdateStudentRequest},
    },
    sections::{
        entities::Section,
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
        responses::SectionListResponse,
    },
    submissions::{
        entities::Submission,
        requests::{CreateSubmissionRequest, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 班级模块
    async fn create_section(&self, teacher_id: i64, req: CreateSectionRequest) -> Result<Section> {
        self.create_section_impl(teacher_id, req).await
    }

    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<Section>> {
        self.get_section_by_id_impl(section_id).await
    }

    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse> {
        self.list_sections_with_pagination_impl(query).await
    }

    async fn update_section(
        &self,
        section_id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        self.update_section_impl(section_id, update).await
    }

    async fn delete_section(&self, section_id: i64) -> Result<bool> {
        self.delete_section_impl(section_id).await
    }

    async fn list_section_ids_for_user(&self, user_id: i64) -> Result<Vec<i64>> {
        self.list_section_ids_for_user_impl(user_id).await
    }

    // 名册模块
    async fn add_student(&self, section_id: i64, req: CreateStudentRequest) -> Result<Student> {
        self.add_student_impl(section_id, req).await
    }

    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn list_section_students(
        &self,
        section_id: i64,
        query: RosterQuery,
    ) -> Result<Vec<Student>> {
        self.list_section_students_impl(section_id, query).await
    }

    async fn update_student(
        &self,
        section_id: i64,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(section_id, student_id, update)
            .await
    }

    async fn remove_student(&self, section_id: i64, student_id: i64) -> Result<bool> {
        self.remove_student_impl(section_id, student_id).await
    }

    async fn get_student_by_user_and_section(
        &self,
        user_id: i64,
        section_id: i64,
    ) -> Result<Option<Student>> {
        self.get_student_by_user_and_section_impl(user_id, section_id)
            .await
    }

    // 学期模块
    async fn create_quarter(&self, req: CreateQuarterRequest) -> Result<Quarter> {
        self.create_quarter_impl(req).await
    }

    async fn get_quarter_by_id(&self, quarter_id: i64) -> Result<Option<Quarter>> {
        self.get_quarter_by_id_impl(quarter_id).await
    }

    async fn list_quarters(&self, query: QuarterListQuery) -> Result<Vec<Quarter>> {
        self.list_quarters_impl(query).await
    }

    async fn update_quarter(
        &self,
        quarter_id: i64,
        update: UpdateQuarterRequest,
    ) -> Result<Option<Quarter>> {
        self.update_quarter_impl(quarter_id, update).await
    }

    async fn delete_quarter(&self, quarter_id: i64) -> Result<bool> {
        self.delete_quarter_impl(quarter_id).await
    }

    // 课程模块
    async fn create_module(
        &self,
        section_id: i64,
        req: CreateModuleRequest,
        user_id: i64,
    ) -> Result<Module> {
        self.create_module_impl(section_id, req, user_id).await
    }

    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<Module>> {
        self.get_module_by_id_impl(module_id).await
    }

    async fn list_section_modules(
        &self,
        section_id: i64,
        query: ModuleListQuery,
    ) -> Result<Vec<Module>> {
        self.list_section_modules_impl(section_id, query).await
    }

    async fn update_module(
        &self,
        module_id: i64,
        update: UpdateModuleRequest,
        user_id: i64,
    ) -> Result<Option<Module>> {
        self.update_module_impl(module_id, update, user_id).await
    }

    async fn delete_module(&self, module_id: i64) -> Result<bool> {
        self.delete_module_impl(module_id).await
    }

    async fn get_module_files(&self, module_id: i64) -> Result<Vec<File>> {
        self.get_module_files_impl(module_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        section_id: i64,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(section_id, created_by, req)
            .await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        section_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(section_id, query)
            .await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    // 测验模块
    async fn create_quiz(
        &self,
        section_id: i64,
        created_by: i64,
        req: CreateQuizRequest,
    ) -> Result<Quiz> {
        self.create_quiz_impl(section_id, created_by, req).await
    }

    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(quiz_id).await
    }

    async fn list_section_quizzes(
        &self,
        section_id: i64,
        query: QuizListQuery,
    ) -> Result<Vec<Quiz>> {
        self.list_section_quizzes_impl(section_id, query).await
    }

    async fn update_quiz(&self, quiz_id: i64, update: UpdateQuizRequest) -> Result<Option<Quiz>> {
        self.update_quiz_impl(quiz_id, update).await
    }

    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool> {
        self.delete_quiz_impl(quiz_id).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        student_id: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(student_id, req).await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_assignment_submissions_impl(assignment_id).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn list_student_submissions(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        self.list_student_submissions_impl(assignment_id, student_id)
            .await
    }

    async fn update_submission_grade(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        self.update_submission_grade_impl(submission_id, grade, feedback)
            .await
    }

    // 文件模块
    async fn create_file(
        &self,
        token: &str,
        file_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        self.create_file_impl(token, file_name, file_size, file_type, user_id)
            .await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }

    async fn increment_file_citation(&self, token: &str) -> Result<()> {
        self.increment_file_citation_impl(token).await
    }

    async fn set_module_files(
        &self,
        module_id: i64,
        tokens: Vec<String>,
        user_id: i64,
    ) -> Result<()> {
        self.set_module_files_impl(module_id, tokens, user_id).await
    }
}
