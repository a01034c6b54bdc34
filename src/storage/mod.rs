use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户总数（用于初始管理员播种）
    async fn count_users(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_section(&self, teacher_id: i64, req: CreateSectionRequest) -> Result<Section>;
    // 通过ID获取班级信息
    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<Section>>;
    // 列出班级
    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse>;
    // 更新班级信息
    async fn update_section(
        &self,
        section_id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>>;
    // 删除班级
    async fn delete_section(&self, section_id: i64) -> Result<bool>;
    // 列出某登录账号作为名册学生所在的班级 ID
    async fn list_section_ids_for_user(&self, user_id: i64) -> Result<Vec<i64>>;

    /// 名册管理方法
    // 添加名册学生
    async fn add_student(&self, section_id: i64, req: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取名册学生
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    // 列出班级名册
    async fn list_section_students(
        &self,
        section_id: i64,
        query: RosterQuery,
    ) -> Result<Vec<Student>>;
    // 更新名册学生
    async fn update_student(
        &self,
        section_id: i64,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 移除名册学生
    async fn remove_student(&self, section_id: i64, student_id: i64) -> Result<bool>;
    // 按登录账号查名册行
    async fn get_student_by_user_and_section(
        &self,
        user_id: i64,
        section_id: i64,
    ) -> Result<Option<Student>>;

    /// 学期管理方法
    async fn create_quarter(&self, req: CreateQuarterRequest) -> Result<Quarter>;
    async fn get_quarter_by_id(&self, quarter_id: i64) -> Result<Option<Quarter>>;
    async fn list_quarters(&self, query: QuarterListQuery) -> Result<Vec<Quarter>>;
    async fn update_quarter(
        &self,
        quarter_id: i64,
        update: UpdateQuarterRequest,
    ) -> Result<Option<Quarter>>;
    async fn delete_quarter(&self, quarter_id: i64) -> Result<bool>;

    /// 课程模块管理方法
    async fn create_module(
        &self,
        section_id: i64,
        req: CreateModuleRequest,
        user_id: i64,
    ) -> Result<Module>;
    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<Module>>;
    async fn list_section_modules(
        &self,
        section_id: i64,
        query: ModuleListQuery,
    ) -> Result<Vec<Module>>;
    async fn update_module(
        &self,
        module_id: i64,
        update: UpdateModuleRequest,
        user_id: i64,
    ) -> Result<Option<Module>>;
    async fn delete_module(&self, module_id: i64) -> Result<bool>;
    // 获取模块附件
    async fn get_module_files(&self, module_id: i64) -> Result<Vec<File>>;

    /// 作业管理方法
    async fn create_assignment(
        &self,
        section_id: i64,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments_with_pagination(
        &self,
        section_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 测验管理方法
    async fn create_quiz(
        &self,
        section_id: i64,
        created_by: i64,
        req: CreateQuizRequest,
    ) -> Result<Quiz>;
    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>>;
    async fn list_section_quizzes(&self, section_id: i64, query: QuizListQuery)
    -> Result<Vec<Quiz>>;
    async fn update_quiz(&self, quiz_id: i64, update: UpdateQuizRequest) -> Result<Option<Quiz>>;
    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 创建提交（自动分配下一个 attempt 序号）
    async fn create_submission(
        &self,
        student_id: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 获取某作业的全部提交行（进度聚合整批拉取）
    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 分页列出提交
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 某学生某作业的全部尝试
    async fn list_student_submissions(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Vec<Submission>>;
    // 写入评分（唯一允许的提交变更）
    async fn update_submission_grade(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;

    /// 文件管理方法
    // 登记上传文件
    async fn create_file(
        &self,
        token: &str,
        file_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File>;
    // 通过唯一 token 获取文件信息
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;
    // 增加文件引用计数
    async fn increment_file_citation(&self, token: &str) -> Result<()>;
    // 设置模块附件（带所有权校验）
    async fn set_module_files(
        &self,
        module_id: i64,
        tokens: Vec<String>,
        user_id: i64,
    ) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
